//! Result store: upsert into the local collection plus best-effort forward
//!
//! Completed records land here exactly once, at the terminal stage. The
//! local save is authoritative for the session; the remote forward is a
//! best-effort notification whose failure never reaches the respondent.

use crate::remote::RemoteCollector;
use crate::storage::{ResultStorage, StorageResult};
use survey_core::{AnswerRecord, HostIdentity};
use tracing::debug;

/// Persistence front for completed answer records
pub struct ResultStore<S: ResultStorage> {
    storage: S,
}

impl<S: ResultStorage> ResultStore<S> {
    /// Create a store over the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All previously completed records
    pub fn load_all(&self) -> StorageResult<Vec<AnswerRecord>> {
        self.storage.load_all()
    }

    /// Insert or update a completed record.
    ///
    /// A stored record matching the dedup key (host identity id if present,
    /// else nickname) is replaced in place; otherwise the record is
    /// appended. Persists and returns the updated collection.
    pub fn upsert(&self, record: &AnswerRecord) -> StorageResult<Vec<AnswerRecord>> {
        let mut records = self.storage.load_all()?;

        match records.iter().position(|stored| record.dedup_matches(stored)) {
            Some(index) => {
                debug!("Updating stored result for {}", record.nickname);
                records[index] = record.clone();
            }
            None => {
                debug!("Appending stored result for {}", record.nickname);
                records.push(record.clone());
            }
        }

        self.storage.save_all(&records)?;
        Ok(records)
    }

    /// Whether this host identity already completed the survey before
    /// (drives the "welcome back" intro variant)
    pub fn is_returning(&self, identity: &HostIdentity) -> bool {
        self.storage
            .load_all()
            .map(|records| {
                records
                    .iter()
                    .any(|record| record.telegram_id == Some(identity.id))
            })
            .unwrap_or(false)
    }

    /// Drop the whole stored collection (the only deletion path)
    pub fn reset_all(&self) -> StorageResult<()> {
        self.storage.save_all(&[])
    }

    /// Upsert the record locally, then forward it to the remote collector
    /// when one is configured. Only the local save can fail the call; the
    /// forward result is deliberately discarded.
    pub async fn submit(
        &self,
        record: &AnswerRecord,
        collector: Option<&RemoteCollector>,
    ) -> StorageResult<Vec<AnswerRecord>> {
        let records = self.upsert(record)?;
        if let Some(collector) = collector {
            let _ = collector.forward(record).await;
        }
        Ok(records)
    }
}
