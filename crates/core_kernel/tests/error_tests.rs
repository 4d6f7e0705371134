//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::identifiers::IdentifierError;
use core_kernel::ClaimIdentifier;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Unknown claim status 'archived'");

    match error {
        CoreError::Validation(msg) => assert!(msg.contains("archived")),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_identifier_error() {
    let identifier_error = "CLM-12345".parse::<ClaimIdentifier>().unwrap_err();
    let core_error: CoreError = identifier_error.into();

    match core_error {
        CoreError::Identifier(IdentifierError::MissingPrefix { expected, value }) => {
            assert_eq!(expected, "CLA");
            assert_eq!(value, "CLM-12345");
        }
        other => panic!("Expected Identifier error, got {other:?}"),
    }
}

#[test]
fn test_identifier_error_messages() {
    let error = IdentifierError::OutOfRange(100_000);
    assert!(error.to_string().contains("100000"));

    let error = IdentifierError::NotFiveDigits("12a45".to_string());
    assert!(error.to_string().contains("12a45"));
}
