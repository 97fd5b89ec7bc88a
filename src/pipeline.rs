//! Rank a batch of loaded resumes and persist the results

use crate::error::{Result, ResumeRankerError};
use crate::input::LoadedDocument;
use crate::output::report::{RankingReport, SkippedFile};
use crate::processing::Ranker;
use crate::store::{RecordStore, ResumeRecord};
use log::{info, warn};

/// What happened to one resume when saving
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Inserted { name: String },
    Duplicate { name: String, existing_score: f32 },
}

/// Score `documents` against `job_description`.
///
/// Scores are computed in input order and re-associated with file names
/// before sorting.
pub fn rank_documents(
    ranker: &Ranker,
    job_description: &str,
    documents: &[LoadedDocument],
    skipped: Vec<SkippedFile>,
) -> Result<RankingReport> {
    if job_description.trim().is_empty() {
        return Err(ResumeRankerError::InvalidInput(
            "Job description is empty".to_string(),
        ));
    }

    let candidates: Vec<(&str, &str)> = documents
        .iter()
        .map(|doc| (doc.name.as_str(), doc.text.as_str()))
        .collect();
    let results = ranker.rank_named(job_description, &candidates);
    info!("Ranked {} resumes", results.len());

    Ok(RankingReport::new(job_description, results).with_skipped(skipped))
}

/// Insert every ranked document that is not stored yet.
///
/// Duplicates are reported, never overwritten. Other store failures abort.
pub fn store_results<S: RecordStore + ?Sized>(
    store: &mut S,
    report: &RankingReport,
    documents: &[LoadedDocument],
) -> Result<Vec<SaveOutcome>> {
    let mut outcomes = Vec::with_capacity(report.results.len());

    // Save in upload order, as the files were given.
    let mut results: Vec<_> = report.results.iter().collect();
    results.sort_by_key(|r| r.index);

    for ranked in results {
        let Some(document) = documents.get(ranked.index) else {
            continue;
        };
        let record = ResumeRecord::new(
            document.name.clone(),
            ranked.score,
            report.job_description.clone(),
            document.text.clone(),
            document.content.clone(),
        );

        match store.insert_if_absent(record) {
            Ok(()) => outcomes.push(SaveOutcome::Inserted {
                name: document.name.clone(),
            }),
            Err(ResumeRankerError::DuplicateRecord {
                name,
                existing_score,
            }) => {
                warn!("{} already exists, keeping stored score", name);
                outcomes.push(SaveOutcome::Duplicate {
                    name,
                    existing_score,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcomes)
}
