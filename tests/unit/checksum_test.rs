//! Tests for Verhoeff checksum validation and identifier extraction

use docverify::core::models::Identifier;
use docverify::core::services::checksum::{check_digit, validate, validate_identifier};
use docverify::core::services::extractor::extract;

use crate::common::{VALID_IDS, digits};

#[test]
fn test_known_valid_identifiers() {
    for id in VALID_IDS {
        assert!(validate(&digits(id)), "{id} should pass");
    }
}

#[test]
fn test_known_invalid_identifiers() {
    assert!(!validate(&digits("123456789012")));
    assert!(!validate(&digits("000000000000")));
}

#[test]
fn test_adjacent_transposition_detected() {
    assert!(validate(&digits("234123412346")));
    assert!(!validate(&digits("234213412346")));
}

#[test]
fn test_short_inputs() {
    assert!(validate(&digits("2363")));
    assert!(!validate(&digits("2364")));
    assert_eq!(check_digit(&digits("236")), 3);
}

#[test]
fn test_check_digit_completes_payload() {
    assert_eq!(check_digit(&digits("36925814702")), 6);
    assert_eq!(check_digit(&digits("23412341234")), 6);
}

#[test]
fn test_validate_identifier() {
    let good = Identifier::parse("2341 2341 2346").unwrap();
    let bad = Identifier::parse("1234 5678 9012").unwrap();
    assert!(validate_identifier(&good));
    assert!(!validate_identifier(&bad));
}

#[test]
fn test_extract_then_validate() {
    let text = "Name: Asha Rao\nAadhaar No. 4991 8723 1500\nVID 9999";
    let id = extract(text).unwrap();
    assert_eq!(id.as_str(), "499187231500");
    assert!(validate_identifier(&id));
}

#[test]
fn test_extract_prefers_grouped_form() {
    let text = "ref 111122223333 then 2341 2341 2346";
    assert_eq!(extract(text).unwrap().as_str(), "234123412346");
}

#[test]
fn test_extract_absent() {
    assert!(extract("hello world").is_none());
    assert!(extract("1234 5678").is_none());
    assert!(extract("").is_none());
}
