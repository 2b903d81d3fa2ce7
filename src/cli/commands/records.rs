//! Manage verification records

use std::path::Path;

use anyhow::{Context, anyhow, bail};

use docverify::adapters::JsonRecordStore;
use docverify::config::Config;
use docverify::core::models::{RecordKind, VerificationRecord};
use docverify::core::ports::RecordStore;
use docverify::output::{OperationResult, OutputMode, RecordListResult};

use crate::cli::app::RecordsAction;

/// Handle records subcommands
pub fn records(
    action: RecordsAction,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let store = JsonRecordStore::open(config.records_dir())?;

    match action {
        RecordsAction::Add {
            id,
            name,
            image,
            kind,
        } => add(&store, &id, &name, &image, &kind, mode),
        RecordsAction::List => {
            RecordListResult {
                records: store.list()?,
            }
            .render(mode);
            Ok(())
        },
        RecordsAction::Verify { ids, force } => verify(&config, store, &ids, force, mode),
    }
}

fn add(
    store: &JsonRecordStore,
    id: &str,
    name: &str,
    image: &Path,
    kind: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow!(e))?;
    if store.get(id)?.is_some() {
        bail!("Record '{id}' already exists");
    }

    let image = image
        .canonicalize()
        .with_context(|| format!("Image not found: {}", image.display()))?;
    let record = VerificationRecord::new(id, kind, name, &image.to_string_lossy());
    store.insert(&record)?;

    OperationResult {
        success: true,
        message: format!("Added {kind} record {id} (Pending)"),
    }
    .render(mode);
    Ok(())
}

/// Pick the records to verify: the named ones, or every pending one
#[cfg(feature = "tokio")]
fn select(store: &JsonRecordStore, ids: &[String]) -> anyhow::Result<Vec<VerificationRecord>> {
    if ids.is_empty() {
        return Ok(store.list()?.into_iter().filter(|r| r.state.is_pending()).collect());
    }

    ids.iter()
        .map(|id| store.get(id)?.ok_or_else(|| anyhow!("Record not found: {id}")))
        .collect()
}

#[cfg(feature = "tokio")]
fn verify(
    config: &Config,
    store: JsonRecordStore,
    ids: &[String],
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    use std::sync::Arc;

    use log::{info, warn};

    use docverify::core::error::PipelineError;
    use docverify::core::models::{FinalVerdict, VerificationRequest};
    use docverify::dispatch::Dispatcher;
    use docverify::output::{BatchEntry, BatchResult};

    let selected = select(&store, ids)?;
    let store: Arc<dyn RecordStore> = Arc::new(store);
    let verifier = super::build_verifier(config)?;
    let mut dispatcher = Dispatcher::new(verifier, Arc::clone(&store), config.worker.max_concurrent)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for record in selected {
        if !record.state.is_pending() {
            if !force {
                warn!("Record {} is already {}; skipping", record.id, record.state);
                skipped.push(record.id);
                continue;
            }
            // The dispatcher's write is still a compare-and-set on Pending
            info!("Reopening record {} (was {})", record.id, record.state);
            store.reopen(&record.id)?;
        }

        match super::read_document_file(Path::new(&record.document_path)) {
            Ok(document) => {
                dispatcher.submit(&record.id, VerificationRequest::new(document, &record.claimed_name));
            },
            Err(e) => {
                let verdict = FinalVerdict::technical_error(&PipelineError::OcrFailure(format!("{e:#}")));
                let applied = store.apply_verdict(&record.id, &verdict)?;
                entries.push(BatchEntry {
                    record_id: record.id,
                    status: Some(verdict.status),
                    applied,
                    detail: verdict.remarks,
                });
            },
        }
    }

    for outcome in dispatcher.shutdown() {
        let status = outcome.verdict.as_ref().map(|v| v.status);
        let detail = outcome
            .error
            .or_else(|| outcome.verdict.map(|v| v.remarks))
            .unwrap_or_default();
        entries.push(BatchEntry {
            record_id: outcome.record_id,
            status,
            applied: outcome.applied,
            detail,
        });
    }
    entries.sort_by(|a, b| a.record_id.cmp(&b.record_id));

    BatchResult { entries, skipped }.render(mode);
    Ok(())
}

#[cfg(not(feature = "tokio"))]
fn verify(
    _config: &Config,
    _store: JsonRecordStore,
    _ids: &[String],
    _force: bool,
    _mode: OutputMode,
) -> anyhow::Result<()> {
    bail!("records verify needs background workers; rebuild with the `tokio` feature")
}
