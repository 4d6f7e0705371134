//! Unit tests for the Identifiers module
//!
//! Tests cover the internal claim key and the human-readable claim
//! identifier and check code: construction, parsing, display and serde.

use core_kernel::{
    ClaimId, ClaimIdentifier, ClaimCheckCode, IdentifierError,
    FIVE_DIGIT_MIN, FIVE_DIGIT_MAX,
};
use proptest::prelude::*;
use uuid::Uuid;

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ClaimId::new();
        let id2 = ClaimId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ClaimId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ClaimId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_str_with_and_without_prefix() {
        let original = ClaimId::new_v7();
        let with_prefix: ClaimId = original.to_string().parse().unwrap();
        let bare: ClaimId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, with_prefix);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }
}

mod claim_identifier_tests {
    use super::*;

    #[test]
    fn test_bounds_are_accepted() {
        let low = ClaimIdentifier::from_number(FIVE_DIGIT_MIN).unwrap();
        let high = ClaimIdentifier::from_number(FIVE_DIGIT_MAX).unwrap();
        assert_eq!(low.to_string(), "CLA-10000");
        assert_eq!(high.to_string(), "CLA-99999");
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            ClaimIdentifier::from_number(9_999),
            Err(IdentifierError::OutOfRange(9_999))
        );
        assert_eq!(
            ClaimIdentifier::from_number(100_000),
            Err(IdentifierError::OutOfRange(100_000))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["CLA-1234", "CLA-123456", "CLA-01234", "CLA12345", "cla-12345", "CLA-12a45", "CLA-+1234", ""] {
            assert!(bad.parse::<ClaimIdentifier>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimIdentifier::prefix(), "CLA");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let id = ClaimIdentifier::from_number(54321).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"CLA-54321\"");

        let back: ClaimIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ClaimIdentifier>("\"CLA-00001\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_display_matches_format(number in FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX) {
            let rendered = ClaimIdentifier::from_number(number).unwrap().to_string();
            prop_assert_eq!(rendered.len(), 9);
            prop_assert!(rendered.starts_with("CLA-"));
            prop_assert!(rendered[4..].bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(rendered.parse::<ClaimIdentifier>().unwrap().number(), number);
        }
    }
}

mod claim_check_code_tests {
    use super::*;

    #[test]
    fn test_display_is_bare_digits() {
        let code = ClaimCheckCode::from_number(70001).unwrap();
        assert_eq!(code.to_string(), "70001");
    }

    #[test]
    fn test_parse_rejects_prefixed_or_short() {
        assert!("CLA-12345".parse::<ClaimCheckCode>().is_err());
        assert!("1234".parse::<ClaimCheckCode>().is_err());
        assert!("09999".parse::<ClaimCheckCode>().is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let code = ClaimCheckCode::from_number(10000).unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"10000\"");
    }
}
