//! In-memory record store

use crate::error::{Result, ResumeRankerError};
use crate::store::{sort_by_score, RecordStore, ResumeRecord};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ResumeRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: Vec<ResumeRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert_if_absent(&mut self, record: ResumeRecord) -> Result<()> {
        if let Some(existing) = self.records.iter().find(|r| r.name == record.name) {
            return Err(ResumeRankerError::DuplicateRecord {
                name: record.name,
                existing_score: existing.score,
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<ResumeRecord>> {
        Ok(self.records.iter().find(|r| r.name == name).cloned())
    }

    fn find_all_sorted_by_score(&self) -> Result<Vec<ResumeRecord>> {
        let mut records = self.records.clone();
        sort_by_score(&mut records);
        Ok(records)
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.records.iter().map(|r| r.name.clone()).collect())
    }

    fn delete_by_name(&mut self, name: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        Ok(self.records.len() < before)
    }

    fn delete_all(&mut self) -> Result<usize> {
        let deleted = self.records.len();
        self.records.clear();
        Ok(deleted)
    }
}
