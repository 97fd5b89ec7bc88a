//! Persisted resume records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Unique key, the uploaded file name
    pub name: String,
    pub score: f32,
    pub job_description: String,
    pub text: String,
    /// Original uploaded bytes
    pub content: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(
        name: impl Into<String>,
        score: f32,
        job_description: impl Into<String>,
        text: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            job_description: job_description.into(),
            text: text.into(),
            content,
            uploaded_at: Utc::now(),
        }
    }

    /// First `max_chars` characters of the job description followed by `...`
    pub fn job_description_preview(&self, max_chars: usize) -> String {
        let preview: String = self.job_description.chars().take(max_chars).collect();
        format!("{}...", preview)
    }
}
