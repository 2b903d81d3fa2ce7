//! Verdict types
//!
//! A verification ends in exactly one [`FinalVerdict`]. Records that wait for
//! one carry a [`VerificationState`], which adds the initial `Pending` state.

use serde::{Deserialize, Serialize};

use crate::core::error::PipelineError;

/// The single user-facing remark attached to every rejection
///
/// Rejections never carry the model's reasoning or which check failed.
pub const REJECTION_REMARK: &str = "KYC verification is incorrect";

/// Outcome of one verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictStatus {
    /// Document judged genuine and matching the claim
    Verified,
    /// Document judged fake, unreadable as this document type, or mismatched
    Rejected,
    /// A collaborator failed; nothing was learned about the document
    Error,
}

impl VerdictStatus {
    /// Normalize a status word from an untrusted source
    ///
    /// Capitalizes the first letter and lower-cases the rest, so `"verified"`
    /// and `"VERIFIED"` both become [`VerdictStatus::Verified`]. Anything
    /// outside the three known values yields `None`.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let mut chars = raw.chars();
        let first = chars.next()?;
        let normalized: String =
            first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect();

        match normalized.as_str() {
            "Verified" => Some(Self::Verified),
            "Rejected" => Some(Self::Rejected),
            "Error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "Verified"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl std::str::FromStr for VerdictStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Invalid status: {s}. Use: verified, rejected, error"))
    }
}

/// The verdict returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalVerdict {
    /// Verified, Rejected or Error
    pub status: VerdictStatus,
    /// Human-readable remark
    pub remarks: String,
}

impl FinalVerdict {
    /// A rejection with the fixed user-facing remark
    #[must_use]
    pub fn rejected() -> Self {
        Self {
            status: VerdictStatus::Rejected,
            remarks: REJECTION_REMARK.to_string(),
        }
    }

    /// A successful verification
    #[must_use]
    pub fn verified(remarks: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Verified,
            remarks: remarks.into(),
        }
    }

    /// A technical failure; the remark describes what broke
    #[must_use]
    pub fn technical_error(err: &PipelineError) -> Self {
        Self {
            status: VerdictStatus::Error,
            remarks: format!("Technical error: {err}"),
        }
    }

    /// Build a verdict, enforcing the fixed rejection remark
    #[must_use]
    pub fn new(status: VerdictStatus, remarks: impl Into<String>) -> Self {
        match status {
            VerdictStatus::Rejected => Self::rejected(),
            _ => Self {
                status,
                remarks: remarks.into(),
            },
        }
    }

    /// Whether the document passed
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == VerdictStatus::Verified
    }
}

/// A verdict as returned by the inference service, before any trust is placed in it
///
/// Both fields may be missing; `status` may hold any string at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticVerdict {
    /// Raw status word
    pub status: Option<String>,
    /// Raw remark
    pub remarks: Option<String>,
}

impl SemanticVerdict {
    /// Create a semantic verdict from raw parts
    #[must_use]
    pub fn new(status: Option<&str>, remarks: Option<&str>) -> Self {
        Self {
            status: status.map(String::from),
            remarks: remarks.map(String::from),
        }
    }

    /// The status, if it normalizes to a known value
    #[must_use]
    pub fn normalized_status(&self) -> Option<VerdictStatus> {
        self.status.as_deref().and_then(VerdictStatus::normalize)
    }
}

/// Verification state of a persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationState {
    /// Not yet verified
    #[default]
    Pending,
    /// Terminal: verified
    Verified,
    /// Terminal: rejected
    Rejected,
    /// Terminal: a collaborator failed
    Error,
}

impl VerificationState {
    /// Whether the pipeline may still write a verdict
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<VerdictStatus> for VerificationState {
    fn from(status: VerdictStatus) -> Self {
        match status {
            VerdictStatus::Verified => Self::Verified,
            VerdictStatus::Rejected => Self::Rejected,
            VerdictStatus::Error => Self::Error,
        }
    }
}

impl std::fmt::Display for VerificationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Verified => write!(f, "Verified"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Error => write!(f, "Error"),
        }
    }
}
