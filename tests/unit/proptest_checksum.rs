//! Property-based tests for the Verhoeff checksum
//!
//! Uses proptest to verify properties that should hold for all inputs.

use docverify::core::models::{Evidence, Identifier, REJECTION_REMARK, SemanticVerdict, VerdictStatus};
use docverify::core::services::checksum::{check_digit, validate};
use docverify::core::services::merge;
use proptest::prelude::*;

fn payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, 11)
}

fn with_check_digit(mut digits: Vec<u8>) -> Vec<u8> {
    let check = check_digit(&digits);
    digits.push(check);
    digits
}

proptest! {
    /// Appending the computed check digit always yields a valid number
    #[test]
    fn check_digit_completes_any_payload(digits in payload()) {
        prop_assert!(validate(&with_check_digit(digits)));
    }

    /// Exactly one check digit works for a payload
    #[test]
    fn only_one_check_digit_is_valid(digits in payload(), wrong in 0u8..10) {
        let right = check_digit(&digits);
        prop_assume!(wrong != right);
        let mut candidate = digits;
        candidate.push(wrong);
        prop_assert!(!validate(&candidate));
    }

    /// Changing any single digit of a valid number is detected
    #[test]
    fn single_digit_alteration_detected(
        digits in payload(),
        position in 0usize..12,
        delta in 1u8..10
    ) {
        let mut altered = with_check_digit(digits);
        altered[position] = (altered[position] + delta) % 10;
        prop_assert!(!validate(&altered));
    }

    /// Swapping two different adjacent digits is detected
    #[test]
    fn adjacent_transposition_detected(digits in payload(), position in 0usize..11) {
        let mut swapped = with_check_digit(digits);
        prop_assume!(swapped[position] != swapped[position + 1]);
        swapped.swap(position, position + 1);
        prop_assert!(!validate(&swapped));
    }

    /// Validation is a pure function of its input
    #[test]
    fn validation_is_deterministic(digits in prop::collection::vec(0u8..10, 1..20)) {
        prop_assert_eq!(validate(&digits), validate(&digits));
    }

    /// Whatever the model says, a failed checksum ends in the fixed rejection
    #[test]
    fn failed_checksum_always_rejected(
        status in "[A-Za-z]{0,10}",
        remarks in proptest::option::of(".{0,40}")
    ) {
        let evidence = Evidence {
            identifier: Some(Identifier::parse("123456789012").unwrap()),
            checksum_valid: false,
            has_markers: true,
            name_present: Some(true),
        };
        let semantic = SemanticVerdict::new(Some(status.as_str()), remarks.as_deref());
        let verdict = merge(&evidence, Some(&semantic));
        prop_assert_eq!(verdict.status, VerdictStatus::Rejected);
        prop_assert_eq!(verdict.remarks, REJECTION_REMARK);
    }

    /// A rejection never carries a remark other than the fixed one
    #[test]
    fn rejection_remark_is_fixed(remarks in ".{0,40}") {
        let evidence = Evidence {
            identifier: Some(Identifier::parse("234123412346").unwrap()),
            checksum_valid: true,
            has_markers: true,
            name_present: None,
        };
        let semantic = SemanticVerdict::new(Some("rejected"), Some(remarks.as_str()));
        let verdict = merge(&evidence, Some(&semantic));
        prop_assert_eq!(verdict.remarks, REJECTION_REMARK);
    }
}
