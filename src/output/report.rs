//! Report structures rendered by the formatters

use crate::processing::RankedResume;
use crate::store::ResumeRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of ranking one batch of resumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub job_description: String,
    /// Highest score first
    pub results: Vec<RankedResume>,
    /// Files that could not be loaded, with the reason
    pub skipped: Vec<SkippedFile>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

impl RankingReport {
    pub fn new(job_description: impl Into<String>, results: Vec<RankedResume>) -> Self {
        Self {
            job_description: job_description.into(),
            results,
            skipped: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedFile>) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn best(&self) -> Option<&RankedResume> {
        self.results.first()
    }
}

/// One line of the stored resumes listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    pub name: String,
    pub score: f32,
    pub job_description: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredRecordsView {
    pub rows: Vec<StoredRow>,
}

impl StoredRecordsView {
    /// Build the listing from records already sorted by score
    pub fn from_records(records: &[ResumeRecord], preview_length: usize) -> Self {
        let rows = records
            .iter()
            .map(|record| StoredRow {
                name: record.name.clone(),
                score: round_score(record.score),
                job_description: record.job_description_preview(preview_length),
                uploaded_at: record.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Round to four decimal places for display
pub fn round_score(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}
