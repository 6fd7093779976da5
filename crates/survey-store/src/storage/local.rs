//! Local filesystem result storage
//!
//! The collection of completed records is one JSON array in one file:
//! - `~/.neuroguide/results.json` (default)
//! - Custom path if specified

use super::{ResultStorage, StorageError, StorageResult};
use std::fs;
use std::path::PathBuf;
use survey_core::AnswerRecord;
use survey_core::config::{STORAGE_DIR, STORAGE_FILE};
use tracing::{debug, warn};

/// Single-file result storage
pub struct LocalResultStorage {
    /// Path of the results blob
    path: PathBuf,
}

impl LocalResultStorage {
    /// Create storage at the default path (~/.neuroguide/results.json)
    pub fn new() -> StorageResult<Self> {
        let path = dirs::home_dir()
            .ok_or(StorageError::PathUnavailable)?
            .join(STORAGE_DIR)
            .join(STORAGE_FILE);

        Ok(Self { path })
    }

    /// Create storage at a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the results blob
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ResultStorage for LocalResultStorage {
    fn load_all(&self) -> StorageResult<Vec<AnswerRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(records) => {
                debug!("Loaded results from {:?}", self.path);
                Ok(records)
            }
            Err(e) => {
                // A mangled blob must not crash the survey; treat it as no
                // prior data.
                warn!("Corrupt results blob at {:?}, treating as empty: {}", self.path, e);
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, records: &[AnswerRecord]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        debug!("Saved {} results to {:?}", records.len(), self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (LocalResultStorage, TempDir) {
        let temp = TempDir::new().unwrap();
        let storage = LocalResultStorage::with_path(temp.path().join("results.json"));
        (storage, temp)
    }

    fn record(nickname: &str) -> AnswerRecord {
        let mut record = AnswerRecord::default();
        record.nickname = nickname.to_string();
        record
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (storage, _temp) = create_test_storage();

        storage
            .save_all(&[record("Anna"), record("Оля")])
            .unwrap();

        let loaded = storage.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].nickname, "Anna");
        assert_eq!(loaded[1].nickname, "Оля");
    }

    #[test]
    fn test_corrupt_blob_reads_empty() {
        let (storage, _temp) = create_test_storage();
        fs::write(storage.path(), "{ definitely not an array").unwrap();

        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let storage =
            LocalResultStorage::with_path(temp.path().join("nested").join("results.json"));
        storage.save_all(&[record("Anna")]).unwrap();
        assert_eq!(storage.load_all().unwrap().len(), 1);
    }
}
