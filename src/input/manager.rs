//! Input manager for loading resumes and job descriptions from disk

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_for;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// A file read from disk together with its extracted text
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// File name without directories, used as the record key
    pub name: String,
    pub file_type: FileType,
    pub content: Vec<u8>,
    pub text: String,
}

pub struct InputManager {
    cache: HashMap<String, LoadedDocument>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a supported file and extract its text.
    ///
    /// Fails only when the file cannot be read or its type is unsupported;
    /// unparseable content produces empty text.
    pub async fn load(&mut self, path: &Path) -> Result<LoadedDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            ResumeRankerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;
        if !file_type.is_supported() {
            return Err(ResumeRankerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        let content = fs::read(path).await?;
        info!("Extracting text from {:?} file: {}", file_type, path.display());
        let text = extract_for(file_type, &content);
        if text.trim().is_empty() {
            warn!("No text could be extracted from {}", path.display());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path_str.clone());

        let document = LoadedDocument {
            name,
            file_type,
            content,
            text,
        };

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        Ok(self.load(path).await?.text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
