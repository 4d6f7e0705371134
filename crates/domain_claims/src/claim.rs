//! Claim record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimCheckCode, ClaimId, ClaimIdentifier, CoreError};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Created from an encounter, still editable
    Draft,
    /// Locked for export to the insurer
    Finalized,
    /// Finalized claim opened again for corrections
    Reopened,
}

impl ClaimStatus {
    /// Storage form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Draft => "draft",
            ClaimStatus::Finalized => "finalized",
            ClaimStatus::Reopened => "reopened",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ClaimStatus::Draft),
            "finalized" => Ok(ClaimStatus::Finalized),
            "reopened" => Ok(ClaimStatus::Reopened),
            other => Err(CoreError::validation(format!("Unknown claim status '{other}'"))),
        }
    }
}

/// Type of service the claim covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceType {
    /// Outpatient department
    #[default]
    #[serde(rename = "OPD")]
    Opd,
    /// Inpatient department
    #[serde(rename = "IPD")]
    Ipd,
}

impl ServiceType {
    /// Storage form of the service type
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Opd => "OPD",
            ServiceType::Ipd => "IPD",
        }
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPD" => Ok(ServiceType::Opd),
            "IPD" => Ok(ServiceType::Ipd),
            other => Err(CoreError::validation(format!("Unknown type of service '{other}'"))),
        }
    }
}

/// Caller-supplied data for a new claim
///
/// Everything except the generated identifier and check code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDraft {
    /// Encounter the claim is raised from
    pub encounter_id: i64,
    /// Attending physician registration number
    pub physician_id: String,
    /// Insurance membership number
    pub member_no: String,
    /// Insurance card serial number
    pub card_serial_no: Option<String>,
    /// Type of service
    #[serde(default)]
    pub type_of_service: ServiceType,
    /// Type of attendance (e.g. EAE, ANC)
    pub type_of_attendance: Option<String>,
    /// Specialty attended (e.g. OPDC, OBGY)
    pub specialty_attended: Option<String>,
    /// User creating the claim
    pub created_by: i64,
}

impl ClaimDraft {
    /// Checks the fields the insurer rejects when blank
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.physician_id.trim().is_empty() {
            return Err(ClaimError::MissingRequiredField("physician_id".to_string()));
        }
        if self.member_no.trim().is_empty() {
            return Err(ClaimError::MissingRequiredField("member_no".to_string()));
        }
        Ok(())
    }
}

/// A persisted insurance claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Internal key
    pub id: ClaimId,
    /// Encounter the claim is raised from
    pub encounter_id: i64,
    /// Externally quoted identifier, unique across all stored claims
    pub claim_id: ClaimIdentifier,
    /// Human verification code, not unique
    pub claim_check_code: ClaimCheckCode,
    pub physician_id: String,
    pub member_no: String,
    pub card_serial_no: Option<String>,
    pub type_of_service: ServiceType,
    pub type_of_attendance: Option<String>,
    pub specialty_attended: Option<String>,
    /// Status
    pub status: ClaimStatus,
    pub created_by: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Set when the claim is finalized
    pub finalized_at: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    /// Creates a new draft claim carrying freshly generated values
    pub fn draft(draft: ClaimDraft, claim_id: ClaimIdentifier, claim_check_code: ClaimCheckCode) -> Self {
        Self {
            id: ClaimId::new_v7(),
            encounter_id: draft.encounter_id,
            claim_id,
            claim_check_code,
            physician_id: draft.physician_id,
            member_no: draft.member_no,
            card_serial_no: draft.card_serial_no,
            type_of_service: draft.type_of_service,
            type_of_attendance: draft.type_of_attendance,
            specialty_attended: draft.specialty_attended,
            status: ClaimStatus::Draft,
            created_by: draft.created_by,
            created_at: Utc::now(),
            finalized_at: None,
        }
    }

    /// Locks the claim for export
    pub fn finalize(&mut self) -> Result<(), ClaimError> {
        self.transition_to(ClaimStatus::Finalized)?;
        self.finalized_at = Some(Utc::now());
        Ok(())
    }

    /// Opens a finalized claim for corrections
    pub fn reopen(&mut self) -> Result<(), ClaimError> {
        self.transition_to(ClaimStatus::Reopened)
    }

    fn transition_to(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        use ClaimStatus::*;
        let allowed = matches!(
            (self.status, target),
            (Draft, Finalized) | (Reopened, Finalized) | (Finalized, Reopened)
        );
        if !allowed {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        self.status = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_storage_form() {
        for status in [ClaimStatus::Draft, ClaimStatus::Finalized, ClaimStatus::Reopened] {
            assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
        }
        assert!("archived".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_service_type_defaults_to_opd() {
        assert_eq!(ServiceType::default(), ServiceType::Opd);
        assert_eq!("IPD".parse::<ServiceType>().unwrap(), ServiceType::Ipd);
    }
}
