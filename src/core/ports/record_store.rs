//! Record store port
//!
//! Defines where background verification results are persisted.

use crate::core::models::{FinalVerdict, VerificationRecord};

/// Storage for records that receive verdicts
///
/// Implementations must make [`apply_verdict`](RecordStore::apply_verdict)
/// an idempotent compare-and-set: the verdict lands only on the record with
/// the given ID, and only while that record is still pending.
pub trait RecordStore: Send + Sync {
    /// Insert or replace a record
    fn insert(&self, record: &VerificationRecord) -> anyhow::Result<()>;

    /// Get a record by ID
    fn get(&self, id: &str) -> anyhow::Result<Option<VerificationRecord>>;

    /// List all records
    fn list(&self) -> anyhow::Result<Vec<VerificationRecord>>;

    /// Write a verdict to a pending record
    ///
    /// Returns `false` without writing when the record is missing or has
    /// already left the pending state.
    fn apply_verdict(&self, id: &str, verdict: &FinalVerdict) -> anyhow::Result<bool>;

    /// Put a decided record back into the pending state for re-verification
    ///
    /// Returns `false` when the record does not exist.
    fn reopen(&self, id: &str) -> anyhow::Result<bool>;
}
