//! Record store persisted as a single JSON document
//!
//! The whole collection is rewritten on every mutation through a temp file
//! and rename, so a crash leaves either the old or the new snapshot.

use crate::error::{Result, ResumeRankerError};
use crate::store::memory::MemoryStore;
use crate::store::{RecordStore, ResumeRecord};
use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<ResumeRecord>,
}

pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
                ResumeRankerError::Storage(format!(
                    "Failed to parse store '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            if snapshot.version != FORMAT_VERSION {
                return Err(ResumeRankerError::Storage(format!(
                    "Unsupported store version {} in '{}'",
                    snapshot.version,
                    path.display()
                )));
            }
            info!(
                "Loaded {} resumes from {}",
                snapshot.records.len(),
                path.display()
            );
            MemoryStore::from_records(snapshot.records)
        } else {
            debug!("No store at {}, starting empty", path.display());
            MemoryStore::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `records` to disk. Callers commit to `inner` only on success.
    fn persist(&self, records: &MemoryStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory '{}'", parent.display())
            })?;
        }

        let snapshot = Snapshot {
            version: FORMAT_VERSION,
            records: records.records().to_vec(),
        };
        let content = serde_json::to_string(&snapshot)?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write '{}'", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace '{}'", self.path.display()))?;

        debug!(
            "Saved {} resumes to {}",
            snapshot.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Apply `change` to a copy of the records, persist it, then commit.
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut staged = self.inner.clone();
        let outcome = change(&mut staged)?;
        self.persist(&staged)?;
        self.inner = staged;
        Ok(outcome)
    }
}

impl RecordStore for JsonFileStore {
    fn insert_if_absent(&mut self, record: ResumeRecord) -> Result<()> {
        self.commit(|records| records.insert_if_absent(record))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<ResumeRecord>> {
        self.inner.find_by_name(name)
    }

    fn find_all_sorted_by_score(&self) -> Result<Vec<ResumeRecord>> {
        self.inner.find_all_sorted_by_score()
    }

    fn names(&self) -> Result<Vec<String>> {
        self.inner.names()
    }

    fn delete_by_name(&mut self, name: &str) -> Result<bool> {
        if self.inner.find_by_name(name)?.is_none() {
            return Ok(false);
        }
        self.commit(|records| records.delete_by_name(name))
    }

    fn delete_all(&mut self) -> Result<usize> {
        if self.inner.is_empty() {
            return Ok(0);
        }
        self.commit(|records| records.delete_all())
    }
}
