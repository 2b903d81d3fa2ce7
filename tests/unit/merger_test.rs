//! Tests for verdict merging precedence

use docverify::PipelineError;
use docverify::core::models::{
    Evidence, FinalVerdict, Identifier, REJECTION_REMARK, SemanticVerdict, VerdictStatus,
};
use docverify::core::services::merge;
use docverify::core::services::merger::{
    CHECKSUM_FALLBACK_REMARK, UNREADABLE_FALLBACK_REMARK, deterministic_rejection,
};

fn evidence(id: Option<&str>, checksum_valid: bool, has_markers: bool) -> Evidence {
    Evidence {
        identifier: id.map(|s| Identifier::parse(s).unwrap()),
        checksum_valid,
        has_markers,
        name_present: None,
    }
}

fn passing() -> Evidence {
    evidence(Some("234123412346"), true, true)
}

fn semantic(status: Option<&str>, remarks: Option<&str>) -> SemanticVerdict {
    SemanticVerdict::new(status, remarks)
}

#[test]
fn test_checksum_overrides_model() {
    let failed = evidence(Some("123456789012"), false, true);
    let verdict = merge(&failed, Some(&semantic(Some("Verified"), Some("All good"))));
    assert_eq!(verdict.status, VerdictStatus::Rejected);
    assert_eq!(verdict.remarks, REJECTION_REMARK);
}

#[test]
fn test_rejection_order() {
    assert_eq!(deterministic_rejection(&evidence(None, false, false)), Some(PipelineError::NotFound));
    assert_eq!(
        deterministic_rejection(&evidence(Some("123456789012"), false, false)),
        Some(PipelineError::ChecksumFailed)
    );
    assert_eq!(
        deterministic_rejection(&evidence(Some("234123412346"), true, false)),
        Some(PipelineError::MarkersAbsent)
    );
    assert_eq!(deterministic_rejection(&passing()), None);
}

#[test]
fn test_model_verdict_used_when_checks_pass() {
    let verdict = merge(&passing(), Some(&semantic(Some("verified"), Some("Name and layout match"))));
    assert_eq!(verdict, FinalVerdict::verified("Name and layout match"));
}

#[test]
fn test_model_rejection_gets_fixed_remark() {
    let verdict = merge(&passing(), Some(&semantic(Some("REJECTED"), Some("Name mismatch"))));
    assert_eq!(verdict.status, VerdictStatus::Rejected);
    assert_eq!(verdict.remarks, REJECTION_REMARK);
}

#[test]
fn test_model_error_passes_through() {
    let verdict = merge(&passing(), Some(&semantic(Some("Error"), Some("cannot read card"))));
    assert_eq!(verdict.status, VerdictStatus::Error);
    assert_eq!(verdict.remarks, "cannot read card");
}

#[test]
fn test_unknown_status_falls_back_to_checksum() {
    let verdict = merge(&passing(), Some(&semantic(Some("Maybe"), None)));
    assert_eq!(verdict, FinalVerdict::verified(CHECKSUM_FALLBACK_REMARK));
}

#[test]
fn test_missing_status_keeps_model_remark() {
    let verdict = merge(&passing(), Some(&semantic(None, Some("looks fine"))));
    assert_eq!(verdict, FinalVerdict::verified("looks fine"));
}

#[test]
fn test_unreadable_model_output_falls_back() {
    let verdict = merge(&passing(), None);
    assert_eq!(verdict, FinalVerdict::verified(UNREADABLE_FALLBACK_REMARK));
}

#[test]
fn test_every_rejection_has_fixed_remark() {
    let cases = [
        (evidence(None, false, true), Some(semantic(Some("Verified"), Some("x")))),
        (evidence(Some("123456789012"), false, true), None),
        (evidence(Some("234123412346"), true, false), Some(semantic(Some("Verified"), None))),
        (passing(), Some(semantic(Some("rejected"), Some("forged hologram")))),
    ];
    for (evidence, semantic) in &cases {
        let verdict = merge(evidence, semantic.as_ref());
        assert_eq!(verdict.status, VerdictStatus::Rejected);
        assert_eq!(verdict.remarks, REJECTION_REMARK);
    }
}
