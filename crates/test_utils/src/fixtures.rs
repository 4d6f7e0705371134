//! Pre-built Test Fixtures
//!
//! Ready-to-use claim data. Values are fixed so that tests stay predictable.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimCheckCode, ClaimId, ClaimIdentifier};
use domain_claims::{ClaimDraft, ClaimRecord, ClaimStatus, ServiceType};
use uuid::Uuid;

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A claim identifier in the middle of the range
    pub fn claim_identifier() -> ClaimIdentifier {
        ClaimIdentifier::from_number(54_321).expect("fixture identifier is in range")
    }

    /// A check code in the middle of the range
    pub fn check_code() -> ClaimCheckCode {
        ClaimCheckCode::from_number(24_680).expect("fixture check code is in range")
    }

    /// A fixed internal key
    pub fn claim_key() -> ClaimId {
        ClaimId::from(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001))
    }

    /// Creation timestamp used by record fixtures (Jan 15, 2024)
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    /// An outpatient draft
    pub fn opd_draft() -> ClaimDraft {
        ClaimDraft {
            encounter_id: 1001,
            physician_id: "SNO-101".to_string(),
            member_no: "NHIS-55501234".to_string(),
            card_serial_no: Some("CS-778899".to_string()),
            type_of_service: ServiceType::Opd,
            type_of_attendance: Some("EAE".to_string()),
            specialty_attended: Some("OPDC".to_string()),
            created_by: 7,
        }
    }

    /// An inpatient draft
    pub fn ipd_draft() -> ClaimDraft {
        ClaimDraft {
            encounter_id: 2002,
            physician_id: "SNO-204".to_string(),
            member_no: "NHIS-55509876".to_string(),
            card_serial_no: None,
            type_of_service: ServiceType::Ipd,
            type_of_attendance: Some("ANC".to_string()),
            specialty_attended: Some("OBGY".to_string()),
            created_by: 7,
        }
    }

    /// A stored draft claim with fixed identifiers and timestamps
    pub fn draft_record() -> ClaimRecord {
        Self::draft_record_with_id(Self::claim_identifier())
    }

    /// A stored draft claim occupying `claim_id`
    pub fn draft_record_with_id(claim_id: ClaimIdentifier) -> ClaimRecord {
        ClaimRecord {
            created_at: Self::created_at(),
            ..ClaimRecord::draft(Self::opd_draft(), claim_id, Self::check_code())
        }
    }

    /// A finalized claim
    pub fn finalized_record() -> ClaimRecord {
        ClaimRecord {
            id: Self::claim_key(),
            status: ClaimStatus::Finalized,
            finalized_at: Some(Self::created_at() + chrono::Duration::days(2)),
            ..Self::draft_record()
        }
    }
}
