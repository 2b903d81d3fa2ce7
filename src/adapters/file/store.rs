//! JSON record store
//!
//! Each record lives at `<dir>/<id>.json`. Writes go through a temporary
//! file and a rename so a reader never sees a half-written record.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, anyhow, bail};
use log::debug;

use crate::core::models::{FinalVerdict, VerificationRecord};
use crate::core::ports::RecordStore;

/// Record store backed by a directory of JSON files
#[derive(Debug)]
pub struct JsonRecordStore {
    dir: PathBuf,
    // Serializes read-check-write in apply_verdict within this process
    write_lock: Mutex<()>,
}

impl JsonRecordStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create records directory {}", dir.display()))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the records
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> anyhow::Result<PathBuf> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }

    fn read(path: &Path) -> anyhow::Result<VerificationRecord> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn write(&self, record: &VerificationRecord) -> anyhow::Result<()> {
        let path = self.path_for(&record.id)?;
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(record)?;
        fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| anyhow!("record store lock poisoned"))
    }
}

/// Record IDs become file names, so keep them to a safe alphabet
fn validate_id(id: &str) -> anyhow::Result<()> {
    if id.is_empty() {
        bail!("Record ID must not be empty");
    }
    if let Some(bad) = id.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')) {
        bail!("Invalid character {bad:?} in record ID '{id}'. Use letters, digits, '-' and '_'");
    }
    Ok(())
}

impl RecordStore for JsonRecordStore {
    fn insert(&self, record: &VerificationRecord) -> anyhow::Result<()> {
        let _guard = self.lock()?;
        self.write(record)
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<VerificationRecord>> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read(&path).map(Some)
    }

    fn list(&self) -> anyhow::Result<Vec<VerificationRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                records.push(Self::read(&path)?);
            }
        }
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    fn apply_verdict(&self, id: &str, verdict: &FinalVerdict) -> anyhow::Result<bool> {
        let _guard = self.lock()?;

        let Some(mut record) = self.get(id)? else {
            debug!("Record {id} vanished before its verdict arrived");
            return Ok(false);
        };
        if !record.state.is_pending() {
            debug!("Record {id} already {}, leaving it alone", record.state);
            return Ok(false);
        }

        record.apply(verdict);
        self.write(&record)?;
        Ok(true)
    }

    fn reopen(&self, id: &str) -> anyhow::Result<bool> {
        let _guard = self.lock()?;

        let Some(mut record) = self.get(id)? else {
            return Ok(false);
        };
        debug!("Reopening record {id} (was {})", record.state);
        record.reopen();
        self.write(&record)?;
        Ok(true)
    }
}
