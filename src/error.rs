//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Resume '{name}' already exists (score {existing_score:.4})")]
    DuplicateRecord { name: String, existing_score: f32 },

    #[error("Resume not found: {0}")]
    RecordNotFound(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Convert anyhow errors to our custom error type, keeping the cause chain
impl From<anyhow::Error> for ResumeRankerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRankerError::Storage(format!("{:#}", err))
    }
}

impl ResumeRankerError {
    /// Errors that should be reported as a warning for one item instead of
    /// aborting the whole command.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ResumeRankerError::DuplicateRecord { .. }
                | ResumeRankerError::RecordNotFound(_)
                | ResumeRankerError::UnsupportedFormat(_)
                | ResumeRankerError::PdfExtraction(_)
                | ResumeRankerError::InvalidInput(_)
                | ResumeRankerError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_rounds_score() {
        let err = ResumeRankerError::DuplicateRecord {
            name: "alice.pdf".to_string(),
            existing_score: 0.123456,
        };
        assert_eq!(err.to_string(), "Resume 'alice.pdf' already exists (score 0.1235)");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_storage_is_fatal() {
        use anyhow::Context;

        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err: ResumeRankerError = io.context("Failed to write 'resumes.json'").unwrap_err().into();
        assert_eq!(err.to_string(), "Storage error: Failed to write 'resumes.json': disk full");
        assert!(!err.is_recoverable());
    }
}
