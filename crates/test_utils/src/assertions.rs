//! Custom Test Assertions
//!
//! Assertion helpers for the string forms of claim identifiers and check
//! codes, with messages that show the offending value.

use core_kernel::{FIVE_DIGIT_MAX, FIVE_DIGIT_MIN};

/// Asserts that `digits` is exactly five ASCII digits within `10000..=99999`
///
/// # Panics
///
/// Panics with the offending value otherwise
pub fn assert_five_digit_number(digits: &str) {
    assert_eq!(digits.len(), 5, "Expected 5 digits, got {:?}", digits);
    assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "Expected only decimal digits, got {:?}",
        digits
    );
    let number: u32 = digits.parse().expect("five ASCII digits parse as u32");
    assert!(
        (FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX).contains(&number),
        "Expected {}..={}, got {}",
        FIVE_DIGIT_MIN,
        FIVE_DIGIT_MAX,
        number
    );
}

/// Asserts that `value` has the `CLA-NNNNN` shape
pub fn assert_claim_identifier_format(value: &str) {
    let digits = value
        .strip_prefix("CLA-")
        .unwrap_or_else(|| panic!("Expected 'CLA-' prefix, got {:?}", value));
    assert_five_digit_number(digits);
}

/// Asserts that `value` is a valid claim check code
pub fn assert_check_code_format(value: &str) {
    assert_five_digit_number(value);
}
