//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim test data that
//! maintains domain invariants.

use core_kernel::{ClaimIdentifier, FIVE_DIGIT_MAX, FIVE_DIGIT_MIN};
use domain_claims::{ClaimDraft, ServiceType};
use proptest::prelude::*;

/// Strategy for valid five-digit numbers
pub fn five_digit_strategy() -> impl Strategy<Value = u32> {
    FIVE_DIGIT_MIN..=FIVE_DIGIT_MAX
}

/// Strategy for valid claim identifiers
pub fn claim_identifier_strategy() -> impl Strategy<Value = ClaimIdentifier> {
    five_digit_strategy().prop_map(|n| {
        ClaimIdentifier::from_number(n).expect("strategy stays in range")
    })
}

/// Strategy for a set of distinct occupied identifiers
pub fn occupied_identifiers_strategy(max: usize) -> impl Strategy<Value = Vec<ClaimIdentifier>> {
    proptest::collection::btree_set(claim_identifier_strategy(), 0..max)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for the type of service
pub fn service_type_strategy() -> impl Strategy<Value = ServiceType> {
    prop_oneof![Just(ServiceType::Opd), Just(ServiceType::Ipd)]
}

/// Strategy for claim drafts with the required fields filled in
pub fn claim_draft_strategy() -> impl Strategy<Value = ClaimDraft> {
    (
        1i64..1_000_000,
        "SNO-[0-9]{3}",
        "NHIS-[0-9]{8}",
        service_type_strategy(),
        1i64..500,
    )
        .prop_map(|(encounter_id, physician_id, member_no, type_of_service, created_by)| {
            ClaimDraft {
                encounter_id,
                physician_id,
                member_no,
                card_serial_no: None,
                type_of_service,
                type_of_attendance: None,
                specialty_attended: None,
                created_by,
            }
        })
}
