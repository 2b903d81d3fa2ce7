//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use docverify::core::models::{Identifier, RecordKind, VerdictStatus};
use docverify::core::services::InferenceFailurePolicy;
use docverify::core::services::extractor::extract;
use docverify::core::services::heuristics::{has_document_markers, name_likely_present};
use test_case::test_case;

// =============================================================================
// Status Normalization
// =============================================================================

#[test_case("Verified", Some(VerdictStatus::Verified) ; "canonical verified")]
#[test_case("verified", Some(VerdictStatus::Verified) ; "lowercase verified")]
#[test_case("VERIFIED", Some(VerdictStatus::Verified) ; "uppercase verified")]
#[test_case("  rejected ", Some(VerdictStatus::Rejected) ; "padded rejected")]
#[test_case("eRROR", Some(VerdictStatus::Error) ; "mixed case error")]
#[test_case("Approved", None ; "unknown word")]
#[test_case("", None ; "empty")]
fn test_status_normalization(raw: &str, expected: Option<VerdictStatus>) {
    assert_eq!(VerdictStatus::normalize(raw), expected);
}

// =============================================================================
// Identifier Extraction
// =============================================================================

#[test_case("No. 2341 2341 2346", Some("234123412346") ; "grouped")]
#[test_case("No.234123412346.", Some("234123412346") ; "contiguous")]
#[test_case("2341\n2341\n2346", Some("234123412346") ; "grouped across lines")]
#[test_case("2341-2341-2346", None ; "dashes are not spaces")]
#[test_case("23412341234", None ; "eleven digits")]
#[test_case("२३४१ २३४१ २३४६", None ; "non ascii digits")]
fn test_extraction(text: &str, expected: Option<&str>) {
    assert_eq!(extract(text).as_ref().map(Identifier::as_str), expected);
}

#[test_case("2341 2341 2346", true ; "spaces stripped")]
#[test_case("234123412346", true ; "plain")]
#[test_case("2341234123", false ; "too short")]
#[test_case("23412341234a", false ; "letter")]
fn test_identifier_parse(input: &str, ok: bool) {
    assert_eq!(Identifier::parse(input).is_ok(), ok);
}

// =============================================================================
// Heuristics
// =============================================================================

#[test_case("GOVERNMENT OF INDIA", true ; "issuer")]
#[test_case("Year of Birth: 1990  Male", true ; "gender label")]
#[test_case("aadhaar", true ; "document name")]
#[test_case("grocery receipt", false ; "unrelated text")]
fn test_document_markers(text: &str, expected: bool) {
    assert_eq!(has_document_markers(text), expected);
}

#[test_case("ASHA RAO", "Asha Rao", true ; "case insensitive")]
#[test_case("Rao, A.", "Asha Rao", true ; "surname only")]
#[test_case("Jo Li", "Jo Li", false ; "only short tokens")]
#[test_case("Priya Nair", "Asha Rao", false ; "different person")]
fn test_name_presence(text: &str, name: &str, expected: bool) {
    assert_eq!(name_likely_present(text, name), expected);
}

// =============================================================================
// Parsing of configuration words
// =============================================================================

#[test_case("kyc", RecordKind::KycProfile ; "kyc")]
#[test_case("blood", RecordKind::BloodRequest ; "blood")]
#[test_case("admin", RecordKind::AdminUser ; "admin")]
fn test_record_kind_parse(input: &str, expected: RecordKind) {
    assert_eq!(input.parse::<RecordKind>().unwrap(), expected);
}

#[test_case("error", InferenceFailurePolicy::Error ; "error")]
#[test_case("Fallback", InferenceFailurePolicy::Fallback ; "fallback any case")]
fn test_policy_parse(input: &str, expected: InferenceFailurePolicy) {
    assert_eq!(input.parse::<InferenceFailurePolicy>().unwrap(), expected);
}
