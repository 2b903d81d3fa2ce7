//! In-memory record store

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::anyhow;

use crate::core::models::{FinalVerdict, VerificationRecord};
use crate::core::ports::RecordStore;

/// Record store held in process memory
///
/// Useful for embedding the pipeline behind another persistence layer and
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<BTreeMap<String, VerificationRecord>>,
}

impl MemoryRecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    #[must_use]
    pub fn with_records(records: Vec<VerificationRecord>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, BTreeMap<String, VerificationRecord>>> {
        self.records.lock().map_err(|_| anyhow!("record store lock poisoned"))
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert(&self, record: &VerificationRecord) -> anyhow::Result<()> {
        self.lock()?.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<VerificationRecord>> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn list(&self) -> anyhow::Result<Vec<VerificationRecord>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn apply_verdict(&self, id: &str, verdict: &FinalVerdict) -> anyhow::Result<bool> {
        let mut records = self.lock()?;
        match records.get_mut(id) {
            Some(record) if record.state.is_pending() => {
                record.apply(verdict);
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    fn reopen(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.lock()?.get_mut(id).map(VerificationRecord::reopen).is_some())
    }
}
