//! Claims repository implementation
//!
//! Raw database access for the `claims` table. Rows are plain column values;
//! mapping onto domain types happens in the claim store adapter.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = r#"
    id, encounter_id, claim_id, claim_check_code, physician_id, member_no,
    card_serial_no, type_of_service, type_of_attendance, specialty_attended,
    status, created_by, created_at, finalized_at
"#;

/// Repository for the claims table
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a claim by its external identifier
    ///
    /// # Arguments
    ///
    /// * `claim_id` - The `CLA-NNNNN` identifier
    pub async fn find_by_claim_id(&self, claim_id: &str) -> Result<Option<ClaimRow>, DatabaseError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Checks whether any claim, in any status, holds this identifier
    pub async fn claim_id_exists(&self, claim_id: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM claims WHERE claim_id = $1)",
        )
        .bind(claim_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Inserts a claim row
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` when the unique index on `claim_id`
    /// rejects the row
    pub async fn insert(&self, row: &ClaimRow) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO claims (
                id, encounter_id, claim_id, claim_check_code, physician_id, member_no,
                card_serial_no, type_of_service, type_of_attendance, specialty_attended,
                status, created_by, created_at, finalized_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(row.id)
        .bind(row.encounter_id)
        .bind(&row.claim_id)
        .bind(&row.claim_check_code)
        .bind(&row.physician_id)
        .bind(&row.member_no)
        .bind(&row.card_serial_no)
        .bind(&row.type_of_service)
        .bind(&row.type_of_attendance)
        .bind(&row.specialty_attended)
        .bind(&row.status)
        .bind(row.created_by)
        .bind(row.created_at)
        .bind(row.finalized_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates a claim's status and finalization time
    pub async fn update_status(
        &self,
        claim_id: &str,
        status: &str,
        finalized_at: Option<DateTime<Utc>>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE claims SET status = $2, finalized_at = $3 WHERE claim_id = $1",
        )
        .bind(claim_id)
        .bind(status)
        .bind(finalized_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Claim", claim_id));
        }
        Ok(())
    }
}

/// Database row for claim
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: Uuid,
    pub encounter_id: i64,
    pub claim_id: String,
    pub claim_check_code: String,
    pub physician_id: String,
    pub member_no: String,
    pub card_serial_no: Option<String>,
    pub type_of_service: String,
    pub type_of_attendance: Option<String>,
    pub specialty_attended: Option<String>,
    pub status: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub finalized_at: Option<DateTime<Utc>>,
}
