//! Background verification
//!
//! Some callers must answer their own client before a verdict exists: a blood
//! request is accepted at once and verified afterwards. [`Dispatcher::submit`]
//! hands a verification to a bounded worker pool and returns immediately; the
//! verdict is written to the caller's record once it is available.
//!
//! Guarantees:
//! - at most `max_concurrent` verifications run at a time
//! - the verdict write happens after the record was created, at some later,
//!   unbounded time
//! - the write is a compare-and-set on the record ID and the `Pending` state,
//!   so a record changed by someone else in the meantime is left alone
//!
//! The dispatcher owns its runtime. Use it from synchronous code only.

use std::sync::Arc;

use anyhow::Context;
use log::{debug, error, info, warn};
use serde::Serialize;
use tokio::runtime::Runtime;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::models::{FinalVerdict, VerificationRequest};
use crate::core::ports::RecordStore;
use crate::core::services::Verifier;

/// What happened to one background job
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    /// Record the verdict was meant for
    pub record_id: String,
    /// The verdict, if the pipeline ran
    pub verdict: Option<FinalVerdict>,
    /// Whether the verdict was written to the record
    pub applied: bool,
    /// Why the job did not complete normally
    pub error: Option<String>,
}

/// Bounded pool of background verifications
pub struct Dispatcher {
    runtime: Runtime,
    verifier: Verifier,
    store: Arc<dyn RecordStore>,
    permits: Arc<Semaphore>,
    jobs: JoinSet<JobOutcome>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("verifier", &self.verifier)
            .field("available_permits", &self.permits.available_permits())
            .field("in_flight", &self.jobs.len())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher running at most `max_concurrent` verifications at once
    pub fn new(
        verifier: Verifier,
        store: Arc<dyn RecordStore>,
        max_concurrent: usize,
    ) -> anyhow::Result<Self> {
        let max_concurrent = max_concurrent.max(1);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(max_concurrent)
            .thread_name("docverify-worker")
            .enable_all()
            .build()
            .context("Failed to start verification runtime")?;

        Ok(Self {
            runtime,
            verifier,
            store,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            jobs: JoinSet::new(),
        })
    }

    /// Number of submitted jobs not yet collected
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.jobs.len()
    }

    /// Queue a verification for `record_id`; returns without waiting
    pub fn submit(&mut self, record_id: &str, request: VerificationRequest) {
        let record_id = record_id.to_string();
        let verifier = self.verifier.clone();
        let store = Arc::clone(&self.store);
        let permits = Arc::clone(&self.permits);

        debug!("Queued background verification for {record_id}");
        self.jobs.spawn_on(
            async move {
                let Ok(permit) = permits.acquire_owned().await else {
                    return JobOutcome {
                        record_id,
                        verdict: None,
                        applied: false,
                        error: Some("dispatcher closed".to_string()),
                    };
                };

                let id = record_id.clone();
                let joined = tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    info!("Starting background verification for {id}");
                    let verdict = verifier.verify(&request);
                    let applied = store.apply_verdict(&id, &verdict);
                    (verdict, applied)
                })
                .await;

                match joined {
                    Ok((verdict, Ok(applied))) => {
                        if applied {
                            info!("Background verification complete for {record_id}: {}", verdict.status);
                        } else {
                            warn!("Record {record_id} was no longer pending; verdict discarded");
                        }
                        JobOutcome {
                            record_id,
                            verdict: Some(verdict),
                            applied,
                            error: None,
                        }
                    },
                    Ok((verdict, Err(e))) => {
                        error!("Failed to persist verdict for {record_id}: {e:#}");
                        JobOutcome {
                            record_id,
                            verdict: Some(verdict),
                            applied: false,
                            error: Some(format!("{e:#}")),
                        }
                    },
                    Err(e) => {
                        error!("Background verification for {record_id} aborted: {e}");
                        JobOutcome {
                            record_id,
                            verdict: None,
                            applied: false,
                            error: Some(e.to_string()),
                        }
                    },
                }
            },
            self.runtime.handle(),
        );
    }

    /// Wait for every submitted job and return their outcomes
    pub fn drain(&mut self) -> Vec<JobOutcome> {
        let jobs = &mut self.jobs;
        self.runtime.block_on(async {
            let mut outcomes = Vec::new();
            while let Some(joined) = jobs.join_next().await {
                match joined {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => error!("Background job lost: {e}"),
                }
            }
            outcomes
        })
    }

    /// Stop accepting work, wait for running jobs, and shut the pool down
    pub fn shutdown(mut self) -> Vec<JobOutcome> {
        let outcomes = self.drain();
        self.permits.close();
        outcomes
    }
}
