//! Storage of ranked resumes
//!
//! Records are keyed by name and never updated once inserted: a second
//! upload with the same name is rejected and the stored record is kept.

pub mod json_file;
pub mod memory;
pub mod record;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::ResumeRecord;

use crate::error::Result;

pub trait RecordStore {
    /// Insert `record` unless one with the same name exists.
    ///
    /// Returns `DuplicateRecord` carrying the existing score otherwise.
    fn insert_if_absent(&mut self, record: ResumeRecord) -> Result<()>;

    fn find_by_name(&self, name: &str) -> Result<Option<ResumeRecord>>;

    /// All records, highest score first
    fn find_all_sorted_by_score(&self) -> Result<Vec<ResumeRecord>>;

    /// Names of all records in insertion order
    fn names(&self) -> Result<Vec<String>>;

    /// `true` when a record was removed
    fn delete_by_name(&mut self, name: &str) -> Result<bool>;

    /// Number of records removed
    fn delete_all(&mut self) -> Result<usize>;
}

/// Descending score, then name for a stable listing
pub(crate) fn sort_by_score(records: &mut [ResumeRecord]) {
    records.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.name.cmp(&b.name))
    });
}
