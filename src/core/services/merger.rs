//! Verdict merging
//!
//! Combines the deterministic evidence with the semantic verdict. The
//! deterministic checks come first and cannot be overruled: an identifier
//! with a bad check digit is rejected whatever the model says.
//!
//! Precedence:
//! 1. No identifier: rejected
//! 2. Checksum failed: rejected
//! 3. No document markers: rejected
//! 4. Semantic verdict, normalized; logic-derived verdict when it is missing
//!    or unusable
//!
//! Every rejection carries [`REJECTION_REMARK`] and nothing else.

use crate::core::error::PipelineError;
use crate::core::models::{Evidence, FinalVerdict, REJECTION_REMARK, SemanticVerdict, VerdictStatus};

/// Remark when the model's status was missing or unknown
pub const CHECKSUM_FALLBACK_REMARK: &str = "Verified via Verhoeff checksum";

/// Remark when the model's answer could not be read at all
pub const UNREADABLE_FALLBACK_REMARK: &str = "Verified via Verhoeff checksum (model output unreadable)";

/// Remark when the model verified without giving a reason
const DEFAULT_VERIFIED_REMARK: &str = "Document verified";

/// The first deterministic check that rules the document out, if any
#[must_use]
pub const fn deterministic_rejection(evidence: &Evidence) -> Option<PipelineError> {
    if !evidence.identifier_found() {
        Some(PipelineError::NotFound)
    } else if !evidence.checksum_valid {
        Some(PipelineError::ChecksumFailed)
    } else if !evidence.has_markers {
        Some(PipelineError::MarkersAbsent)
    } else {
        None
    }
}

/// Verdict from the checksum alone
#[must_use]
pub fn logic_verdict(evidence: &Evidence, remark: &str) -> FinalVerdict {
    if evidence.checksum_valid {
        FinalVerdict::verified(remark)
    } else {
        FinalVerdict::rejected()
    }
}

/// Merge evidence and an optional semantic verdict into the final verdict
///
/// `semantic` is `None` when the model's answer was unreadable.
#[must_use]
pub fn merge(evidence: &Evidence, semantic: Option<&SemanticVerdict>) -> FinalVerdict {
    if deterministic_rejection(evidence).is_some() {
        return FinalVerdict::rejected();
    }

    let Some(semantic) = semantic else {
        return logic_verdict(evidence, UNREADABLE_FALLBACK_REMARK);
    };

    let verdict = match semantic.normalized_status() {
        Some(status) => {
            let remarks = semantic.remarks.as_deref().unwrap_or(DEFAULT_VERIFIED_REMARK);
            FinalVerdict::new(status, remarks)
        },
        None => {
            let remark = semantic.remarks.as_deref().unwrap_or(CHECKSUM_FALLBACK_REMARK);
            logic_verdict(evidence, remark)
        },
    };

    enforce_rejection_remark(verdict)
}

fn enforce_rejection_remark(verdict: FinalVerdict) -> FinalVerdict {
    if verdict.status == VerdictStatus::Rejected && verdict.remarks != REJECTION_REMARK {
        FinalVerdict::rejected()
    } else {
        verdict
    }
}
