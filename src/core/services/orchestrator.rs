//! Verification orchestrator
//!
//! Runs one verification end to end:
//!
//! ```text
//! OCR -> extract identifier -> checksum -> markers -> (model) -> merge
//! ```
//!
//! Deterministic rejections short-circuit before the model is consulted.
//! [`Verifier::verify`] always returns a verdict; collaborator failures and
//! panics become `Error` verdicts instead of propagating.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use super::prompt::{DEFAULT_MAX_TEXT_CHARS, PromptEvidence, build_prompt, parse_verdict};
use super::{checksum, extractor, heuristics, merger};
use crate::core::error::PipelineError;
use crate::core::models::{Evidence, FinalVerdict, VerificationRequest};
use crate::core::ports::{InferenceClient, OcrEngine};

/// What to do when the inference service itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceFailurePolicy {
    /// Report an `Error` verdict: the outcome is inconclusive
    #[default]
    Error,
    /// Fall back to the checksum-derived verdict
    Fallback,
}

impl std::str::FromStr for InferenceFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "fallback" => Ok(Self::Fallback),
            _ => Err(format!("Unknown inference failure policy: {s}. Use 'error' or 'fallback'")),
        }
    }
}

/// Tunables for a [`Verifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Cap on recognized-text characters sent to the model
    pub max_text_chars: usize,
    /// Handling of inference transport failures
    pub on_inference_failure: InferenceFailurePolicy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            on_inference_failure: InferenceFailurePolicy::default(),
        }
    }
}

/// Run the deterministic checks over recognized text
#[must_use]
pub fn gather_evidence(text: &str, claimed_name: &str) -> Evidence {
    let identifier = extractor::extract(text);
    let checksum_valid = identifier.as_ref().is_some_and(checksum::validate_identifier);
    let name_present = if claimed_name.trim().is_empty() {
        None
    } else {
        Some(heuristics::name_likely_present(text, claimed_name))
    };

    Evidence {
        identifier,
        checksum_valid,
        has_markers: heuristics::has_document_markers(text),
        name_present,
    }
}

/// OCR output and local evidence, without consulting the model
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Raw OCR output
    pub recognized_text: String,
    /// Deterministic evidence
    pub evidence: Evidence,
    /// Why the document would be rejected before the model is asked
    pub rejection: Option<String>,
    /// The prompt that would be sent, when no deterministic rejection applies
    pub prompt: Option<String>,
}

/// The verification pipeline
///
/// Cheap to clone; clones share the collaborators.
#[derive(Clone)]
pub struct Verifier {
    ocr: Arc<dyn OcrEngine>,
    inference: Arc<dyn InferenceClient>,
    settings: PipelineSettings,
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("model", &self.inference.model())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Verifier {
    /// Create a verifier over the given collaborators
    #[must_use]
    pub fn new(
        ocr: Arc<dyn OcrEngine>,
        inference: Arc<dyn InferenceClient>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            ocr,
            inference,
            settings,
        }
    }

    /// Pipeline settings in use
    #[must_use]
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Verify a document; never panics, never fails
    #[must_use]
    pub fn verify(&self, request: &VerificationRequest) -> FinalVerdict {
        match catch_unwind(AssertUnwindSafe(|| self.run(request))) {
            Ok(verdict) => {
                info!("Verification complete: {}", verdict.status);
                verdict
            },
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(ToString::to_string)
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("Verification panicked: {message}");
                FinalVerdict::technical_error(&PipelineError::Aborted(message))
            },
        }
    }

    /// OCR and deterministic checks only
    pub fn inspect(&self, request: &VerificationRequest) -> Result<Inspection, PipelineError> {
        let recognized_text = self.ocr.recognize(&request.document)?;
        let evidence = gather_evidence(&recognized_text, &request.claimed_name);
        let rejection = merger::deterministic_rejection(&evidence);
        let prompt = rejection.is_none().then(|| self.prompt_for(&recognized_text, request, &evidence));

        Ok(Inspection {
            rejection: rejection.map(|e| e.to_string()),
            prompt,
            recognized_text,
            evidence,
        })
    }

    fn prompt_for(&self, text: &str, request: &VerificationRequest, evidence: &Evidence) -> String {
        build_prompt(&PromptEvidence {
            recognized_text: text,
            claimed_name: &request.claimed_name,
            identifier: evidence.identifier.as_ref(),
            checksum_valid: evidence.checksum_valid,
            max_text_chars: self.settings.max_text_chars,
        })
    }

    fn run(&self, request: &VerificationRequest) -> FinalVerdict {
        debug!(
            "Starting verification for '{}' ({} image)",
            request.claimed_name,
            request.document.kind()
        );

        let text = match self.ocr.recognize(&request.document) {
            Ok(text) => text,
            Err(err) => {
                error!("OCR failed: {err}");
                return FinalVerdict::technical_error(&err);
            },
        };
        debug!("OCR extracted {} characters", text.len());

        let evidence = gather_evidence(&text, &request.claimed_name);

        if let Some(reason) = merger::deterministic_rejection(&evidence) {
            info!("Rejected before semantic review: {reason}");
            return FinalVerdict::rejected();
        }

        if let Some(id) = &evidence.identifier {
            debug!("Identifier {} passed checksum", id.masked());
        }
        if evidence.name_present == Some(false) {
            warn!("Claimed name '{}' not found in OCR text; deferring to semantic review", request.claimed_name);
        }

        let prompt = self.prompt_for(&text, request, &evidence);
        debug!("Calling inference model {} ({} prompt chars)", self.inference.model(), prompt.len());

        let semantic = match self.inference.complete(&prompt) {
            Ok(completion) => match parse_verdict(&completion) {
                Ok(verdict) => Some(verdict),
                Err(err) => {
                    warn!("{err}; falling back to checksum verdict");
                    None
                },
            },
            Err(err) => match self.settings.on_inference_failure {
                InferenceFailurePolicy::Error => {
                    error!("{err}");
                    return FinalVerdict::technical_error(&err);
                },
                InferenceFailurePolicy::Fallback => {
                    warn!("{err}; falling back to checksum verdict");
                    None
                },
            },
        };

        merger::merge(&evidence, semantic.as_ref())
    }
}
