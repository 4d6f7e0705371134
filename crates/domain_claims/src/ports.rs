//! Claims Domain Ports
//!
//! Port interfaces through which the claims domain reaches the persistent
//! claim store. Adapters:
//!
//! - **PostgreSQL**: `infra_db::PostgresClaimStore`
//! - **In-memory**: `test_utils::InMemoryClaimStore`, for tests
//!
//! The identifier generator only needs [`ClaimLookupPort`]; issuing and
//! updating claims needs the full [`ClaimStorePort`].

use async_trait::async_trait;

use core_kernel::{ClaimIdentifier, DomainPort, PortError};

use crate::claim::ClaimRecord;

/// Read access to stored claims by their external identifier
///
/// Lookups must see every claim ever written, including ones no longer
/// active, and must be consistent with prior writes at the time of the call.
#[async_trait]
pub trait ClaimLookupPort: DomainPort {
    /// Fetches a claim by exact identifier match
    async fn find_by_claim_id(
        &self,
        claim_id: &ClaimIdentifier,
    ) -> Result<Option<ClaimRecord>, PortError>;

    /// Returns true if a claim with this identifier is stored
    async fn claim_id_exists(&self, claim_id: &ClaimIdentifier) -> Result<bool, PortError> {
        Ok(self.find_by_claim_id(claim_id).await?.is_some())
    }
}

/// Full claim persistence
#[async_trait]
pub trait ClaimStorePort: ClaimLookupPort {
    /// Inserts a new claim
    ///
    /// # Errors
    ///
    /// Returns `PortError::Conflict` when the `claim_id` is already stored.
    async fn insert_claim(&self, claim: &ClaimRecord) -> Result<(), PortError>;

    /// Persists a status change, with `finalized_at` as held by the record
    async fn update_status(&self, claim: &ClaimRecord) -> Result<(), PortError>;
}

