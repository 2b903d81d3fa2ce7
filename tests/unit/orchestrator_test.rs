//! End-to-end pipeline scenarios over stub collaborators

use std::sync::Arc;

use docverify::core::models::{FinalVerdict, REJECTION_REMARK, VerdictStatus};
use docverify::core::services::InferenceFailurePolicy;
use docverify::core::services::merger::UNREADABLE_FALLBACK_REMARK;

use crate::common::{FixedOcr, GENUINE_TEXT, ScriptedModel, request, verifier};

const VERIFIED_REPLY: &str = r#"{"status": "Verified", "remarks": "Name and number match"}"#;

#[test]
fn test_genuine_card_verified() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::text(GENUINE_TEXT), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict, FinalVerdict::verified("Name and number match"));
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_model_reply_wrapped_in_prose() {
    let reply = "Sure! Here is the result:\n```json\n{\"status\": \"verified\", \"remarks\": \"ok\"}\n```";
    let model = Arc::new(ScriptedModel::replying(reply));
    let verdict =
        verifier(FixedOcr::text(GENUINE_TEXT), model, InferenceFailurePolicy::Error).verify(&request());
    assert_eq!(verdict, FinalVerdict::verified("ok"));
}

#[test]
fn test_photo_of_nothing_rejected_without_model() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::text("hello world"), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict.status, VerdictStatus::Rejected);
    assert_eq!(verdict.remarks, REJECTION_REMARK);
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_forged_number_rejected_even_if_model_approves() {
    let text = GENUINE_TEXT.replace("2341 2341 2346", "1234 5678 9012");
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::text(&text), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict, FinalVerdict::rejected());
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_number_without_markers_rejected() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::text("receipt 2341 2341 2346"), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict, FinalVerdict::rejected());
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_garbage_model_output_falls_back_to_checksum() {
    let model = Arc::new(ScriptedModel::replying("I think it is probably fine"));
    let verdict =
        verifier(FixedOcr::text(GENUINE_TEXT), model, InferenceFailurePolicy::Error).verify(&request());
    assert_eq!(verdict, FinalVerdict::verified(UNREADABLE_FALLBACK_REMARK));
}

#[test]
fn test_unreachable_model_is_error_by_default() {
    let model = Arc::new(ScriptedModel::unreachable());
    let verdict =
        verifier(FixedOcr::text(GENUINE_TEXT), model, InferenceFailurePolicy::Error).verify(&request());

    assert_eq!(verdict.status, VerdictStatus::Error);
    assert!(verdict.remarks.starts_with("Technical error:"));
    assert!(verdict.remarks.contains("connection refused"));
}

#[test]
fn test_unreachable_model_with_fallback_policy() {
    let model = Arc::new(ScriptedModel::unreachable());
    let verdict =
        verifier(FixedOcr::text(GENUINE_TEXT), model, InferenceFailurePolicy::Fallback).verify(&request());
    assert_eq!(verdict, FinalVerdict::verified(UNREADABLE_FALLBACK_REMARK));
}

#[test]
fn test_unreachable_model_cannot_rescue_forgery() {
    let text = GENUINE_TEXT.replace("2341 2341 2346", "1234 5678 9012");
    let model = Arc::new(ScriptedModel::unreachable());
    let verdict =
        verifier(FixedOcr::text(&text), model, InferenceFailurePolicy::Fallback).verify(&request());
    assert_eq!(verdict, FinalVerdict::rejected());
}

#[test]
fn test_ocr_failure_is_error() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::failing("corrupt image"), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict.status, VerdictStatus::Error);
    assert!(verdict.remarks.contains("corrupt image"));
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_name_mismatch_is_left_to_model() {
    let text = GENUINE_TEXT.replace("Asha Rao", "Someone Else");
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let verdict = verifier(FixedOcr::text(&text), Arc::clone(&model), InferenceFailurePolicy::Error)
        .verify(&request());

    assert_eq!(verdict.status, VerdictStatus::Verified);
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_name_check_stays_out_of_prompt() {
    let text = GENUINE_TEXT.replace("Asha Rao", "Someone Else");
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let inspection = verifier(FixedOcr::text(&text), Arc::clone(&model), InferenceFailurePolicy::Error)
        .inspect(&request())
        .unwrap();

    assert_eq!(inspection.evidence.name_present, Some(false));
    assert!(inspection.rejection.is_none());
    let prompt = inspection.prompt.unwrap();
    // Only the four slots: text, claimed name, identifier, checksum result
    let slots: Vec<&str> = prompt.lines().filter(|l| l.starts_with('"')).collect();
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[1], "\"Asha Rao\"");
    assert!(!prompt.contains("likely"));
}

#[test]
fn test_inspect_reports_evidence_and_prompt() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let inspection = verifier(FixedOcr::text(GENUINE_TEXT), Arc::clone(&model), InferenceFailurePolicy::Error)
        .inspect(&request())
        .unwrap();

    assert!(inspection.evidence.checksum_valid);
    assert!(inspection.rejection.is_none());
    let prompt = inspection.prompt.unwrap();
    assert!(prompt.contains("\"234123412346\""));
    assert!(prompt.contains("\"Passed\""));
    assert!(prompt.contains("\"Asha Rao\""));
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_inspect_reports_rejection_reason() {
    let model = Arc::new(ScriptedModel::replying(VERIFIED_REPLY));
    let inspection = verifier(FixedOcr::text("hello world"), model, InferenceFailurePolicy::Error)
        .inspect(&request())
        .unwrap();

    assert!(inspection.prompt.is_none());
    assert!(inspection.rejection.unwrap().contains("no identifier"));
}
