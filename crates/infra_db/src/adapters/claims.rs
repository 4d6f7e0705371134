//! PostgreSQL Claim Store Adapter
//!
//! Implements the claims domain ports over the `ClaimsRepository`:
//!
//! - Translates domain records into rows and back
//! - Translates database errors into port errors; a unique violation on
//!   `claim_id` becomes `PortError::Conflict`, which the issuance service
//!   treats as a signal to draw a new identifier
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::PostgresClaimStore;
//! use domain_claims::generate_claim_id;
//!
//! let store = PostgresClaimStore::new(pool);
//! let claim_id = generate_claim_id(&store).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, ClaimIdentifier, CoreError, DomainPort, HealthCheckResult, HealthCheckable,
    PortError,
};
use domain_claims::{ClaimLookupPort, ClaimRecord, ClaimStorePort};

use crate::error::DatabaseError;
use crate::repositories::claims::{ClaimRow, ClaimsRepository};

/// PostgreSQL-backed implementation of the claim store ports
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    repository: ClaimsRepository,
    pool: PgPool,
}

impl PostgresClaimStore {
    /// Creates a new PostgreSQL claim store
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ClaimsRepository {
        &self.repository
    }
}

impl DomainPort for PostgresClaimStore {}

#[async_trait]
impl HealthCheckable for PostgresClaimStore {
    /// Checks database connectivity with `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };
        HealthCheckResult {
            adapter_id: "postgres-claim-store".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimLookupPort for PostgresClaimStore {
    #[instrument(skip(self, claim_id), fields(claim_id = %claim_id))]
    async fn find_by_claim_id(
        &self,
        claim_id: &ClaimIdentifier,
    ) -> Result<Option<ClaimRecord>, PortError> {
        debug!("Fetching claim by identifier");

        let row = self
            .repository
            .find_by_claim_id(&claim_id.to_string())
            .await?;

        match row {
            Some(row) => Ok(Some(row_to_record(row).map_err(DatabaseError::from)?)),
            None => Ok(None),
        }
    }

    async fn claim_id_exists(&self, claim_id: &ClaimIdentifier) -> Result<bool, PortError> {
        Ok(self.repository.claim_id_exists(&claim_id.to_string()).await?)
    }
}

#[async_trait]
impl ClaimStorePort for PostgresClaimStore {
    #[instrument(skip(self, claim), fields(claim_id = %claim.claim_id))]
    async fn insert_claim(&self, claim: &ClaimRecord) -> Result<(), PortError> {
        debug!("Inserting claim");
        self.repository.insert(&record_to_row(claim)).await?;
        Ok(())
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.claim_id, status = %claim.status))]
    async fn update_status(&self, claim: &ClaimRecord) -> Result<(), PortError> {
        self.repository
            .update_status(&claim.claim_id.to_string(), claim.status.as_str(), claim.finalized_at)
            .await?;
        Ok(())
    }
}

/// Maps a stored row onto a claim record
pub fn row_to_record(row: ClaimRow) -> Result<ClaimRecord, CoreError> {
    Ok(ClaimRecord {
        id: row.id.into(),
        encounter_id: row.encounter_id,
        claim_id: row.claim_id.parse()?,
        claim_check_code: row.claim_check_code.parse()?,
        physician_id: row.physician_id,
        member_no: row.member_no,
        card_serial_no: row.card_serial_no,
        type_of_service: row.type_of_service.parse()?,
        type_of_attendance: row.type_of_attendance,
        specialty_attended: row.specialty_attended,
        status: row.status.parse()?,
        created_by: row.created_by,
        created_at: row.created_at,
        finalized_at: row.finalized_at,
    })
}

/// Maps a claim record onto a row for insertion
pub fn record_to_row(claim: &ClaimRecord) -> ClaimRow {
    ClaimRow {
        id: *claim.id.as_uuid(),
        encounter_id: claim.encounter_id,
        claim_id: claim.claim_id.to_string(),
        claim_check_code: claim.claim_check_code.to_string(),
        physician_id: claim.physician_id.clone(),
        member_no: claim.member_no.clone(),
        card_serial_no: claim.card_serial_no.clone(),
        type_of_service: claim.type_of_service.as_str().to_string(),
        type_of_attendance: claim.type_of_attendance.clone(),
        specialty_attended: claim.specialty_attended.clone(),
        status: claim.status.as_str().to_string(),
        created_by: claim.created_by,
        created_at: claim.created_at,
        finalized_at: claim.finalized_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain_claims::{ClaimStatus, ServiceType};
    use uuid::Uuid;

    fn sample_row() -> ClaimRow {
        ClaimRow {
            id: Uuid::now_v7(),
            encounter_id: 42,
            claim_id: "CLA-12345".to_string(),
            claim_check_code: "67890".to_string(),
            physician_id: "SNO-001".to_string(),
            member_no: "NHIS-0001".to_string(),
            card_serial_no: None,
            type_of_service: "IPD".to_string(),
            type_of_attendance: Some("EAE".to_string()),
            specialty_attended: None,
            status: "finalized".to_string(),
            created_by: 3,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            finalized_at: Some(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_row_maps_to_record_and_back() {
        let row = sample_row();
        let record = row_to_record(row.clone()).unwrap();

        assert_eq!(record.claim_id.to_string(), "CLA-12345");
        assert_eq!(record.claim_check_code.number(), 67890);
        assert_eq!(record.type_of_service, ServiceType::Ipd);
        assert_eq!(record.status, ClaimStatus::Finalized);
        assert_eq!(record_to_row(&record), row);
    }

    #[test]
    fn test_malformed_identifier_is_rejected() {
        let row = ClaimRow {
            claim_id: "CLM-12345".to_string(),
            ..sample_row()
        };
        assert!(matches!(row_to_record(row), Err(CoreError::Identifier(_))));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let row = ClaimRow {
            status: "archived".to_string(),
            ..sample_row()
        };
        assert!(matches!(row_to_record(row), Err(CoreError::Validation(_))));
    }
}
