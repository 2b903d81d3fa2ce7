//! Caller-owned records that receive verdicts
//!
//! The pipeline only ever writes `state`, `remarks` and `updated_at`.

use serde::{Deserialize, Serialize};

use super::{FinalVerdict, VerificationState};

/// Which workflow a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Customer KYC profile
    #[default]
    KycProfile,
    /// Blood request submitted with an identity document
    BloodRequest,
    /// Re-verification of a user triggered by an administrator
    AdminUser,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KycProfile => write!(f, "kyc_profile"),
            Self::BloodRequest => write!(f, "blood_request"),
            Self::AdminUser => write!(f, "admin_user"),
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "kyc_profile" | "kyc" => Ok(Self::KycProfile),
            "blood_request" | "blood" => Ok(Self::BloodRequest),
            "admin_user" | "admin" => Ok(Self::AdminUser),
            _ => Err(format!("Unknown record kind: {s}. Use: kyc, blood, admin")),
        }
    }
}

/// A record awaiting (or holding) a verification verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Record ID, unique within a store
    pub id: String,
    /// Workflow this record belongs to
    #[serde(default)]
    pub kind: RecordKind,
    /// Name the document should carry
    pub claimed_name: String,
    /// Path to the stored document image
    pub document_path: String,
    /// Current state
    #[serde(default)]
    pub state: VerificationState,
    /// Remark from the last verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Last change (RFC3339)
    pub updated_at: String,
}

impl VerificationRecord {
    /// Create a pending record
    #[must_use]
    pub fn new(id: &str, kind: RecordKind, claimed_name: &str, document_path: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            claimed_name: claimed_name.to_string(),
            document_path: document_path.to_string(),
            state: VerificationState::Pending,
            remarks: None,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Apply a verdict to this record
    pub fn apply(&mut self, verdict: &FinalVerdict) {
        self.state = verdict.status.into();
        self.remarks = Some(verdict.remarks.clone());
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// Return the record to `Pending` so a fresh verdict can land
    pub fn reopen(&mut self) {
        self.state = VerificationState::Pending;
        self.remarks = None;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}
