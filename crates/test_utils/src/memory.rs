//! In-memory Claim Store
//!
//! A `ClaimStorePort` backed by a `HashMap`, for tests that should not need
//! PostgreSQL. Besides plain storage it can simulate the failure modes the
//! claims domain has to cope with:
//!
//! - every lookup failing (store unreachable)
//! - inserts rejected as duplicates, as if a concurrent writer had stored the
//!   same `claim_id` between the existence check and the insert
//! - a concurrent writer that really does store the looked-up `claim_id`
//!   right after the check, so the duplicate is caught by the store itself

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, ClaimIdentifier, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_claims::{ClaimLookupPort, ClaimRecord, ClaimStorePort};

use crate::fixtures::ClaimFixtures;

/// In-memory implementation of the claim store ports
#[derive(Debug, Default)]
pub struct InMemoryClaimStore {
    claims: Arc<RwLock<HashMap<ClaimIdentifier, ClaimRecord>>>,
    lookups: AtomicUsize,
    fail_lookups: AtomicBool,
    pending_conflicts: AtomicU32,
    race_next_lookup: AtomicBool,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with claims
    pub async fn with_claims(claims: Vec<ClaimRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.claims.write().await;
            for claim in claims {
                map.insert(claim.claim_id, claim);
            }
        }
        store
    }

    /// Pre-populates with fixture claims occupying the given identifiers
    pub async fn with_identifiers(ids: impl IntoIterator<Item = ClaimIdentifier>) -> Self {
        let claims = ids.into_iter().map(ClaimFixtures::draft_record_with_id).collect();
        Self::with_claims(claims).await
    }

    /// Makes every subsequent lookup fail with a connection error
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// Rejects the next `count` inserts with a conflict, regardless of content
    pub fn conflict_on_next_inserts(&self, count: u32) {
        self.pending_conflicts.store(count, Ordering::SeqCst);
    }

    /// On the next lookup, reports the identifier free and then stores a
    /// fixture claim under it, as a second issuer would
    pub fn race_next_lookup(&self) {
        self.race_next_lookup.store(true, Ordering::SeqCst);
    }

    /// Identifiers of all stored claims
    pub async fn claim_ids(&self) -> Vec<ClaimIdentifier> {
        self.claims.read().await.keys().copied().collect()
    }

    /// Number of lookups served so far, failed ones included
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Number of stored claims
    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }

    fn take_pending_conflict(&self) -> bool {
        self.pending_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        let status = if self.fail_lookups.load(Ordering::SeqCst) {
            AdapterHealth::Unhealthy
        } else {
            AdapterHealth::Healthy
        };
        HealthCheckResult {
            adapter_id: "in-memory-claim-store".to_string(),
            status,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimLookupPort for InMemoryClaimStore {
    async fn find_by_claim_id(
        &self,
        claim_id: &ClaimIdentifier,
    ) -> Result<Option<ClaimRecord>, PortError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(PortError::connection("in-memory claim store is offline"));
        }
        let mut claims = self.claims.write().await;
        let found = claims.get(claim_id).cloned();
        if found.is_none() && self.race_next_lookup.swap(false, Ordering::SeqCst) {
            claims.insert(*claim_id, ClaimFixtures::draft_record_with_id(*claim_id));
        }
        Ok(found)
    }
}

#[async_trait]
impl ClaimStorePort for InMemoryClaimStore {
    async fn insert_claim(&self, claim: &ClaimRecord) -> Result<(), PortError> {
        if self.take_pending_conflict() {
            return Err(PortError::conflict(format!(
                "claim_id '{}' already exists",
                claim.claim_id
            )));
        }
        let mut claims = self.claims.write().await;
        if claims.contains_key(&claim.claim_id) {
            return Err(PortError::conflict(format!(
                "claim_id '{}' already exists",
                claim.claim_id
            )));
        }
        claims.insert(claim.claim_id, claim.clone());
        Ok(())
    }

    async fn update_status(&self, claim: &ClaimRecord) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;
        let stored = claims
            .get_mut(&claim.claim_id)
            .ok_or_else(|| PortError::not_found("Claim", claim.claim_id))?;
        stored.status = claim.status;
        stored.finalized_at = claim.finalized_at;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let store = InMemoryClaimStore::new();
        let record = ClaimFixtures::draft_record();

        store.insert_claim(&record).await.unwrap();

        let found = store.find_by_claim_id(&record.claim_id).await.unwrap();
        assert_eq!(found, Some(record));
        assert_eq!(store.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = InMemoryClaimStore::new();
        let record = ClaimFixtures::draft_record();
        store.insert_claim(&record).await.unwrap();

        let err = store.insert_claim(&record).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_injected_conflicts_are_consumed() {
        let store = InMemoryClaimStore::new();
        store.conflict_on_next_inserts(1);

        let first = ClaimFixtures::draft_record();
        assert!(store.insert_claim(&first).await.unwrap_err().is_conflict());
        assert!(store.insert_claim(&first).await.is_ok());
    }

    #[tokio::test]
    async fn test_raced_lookup_reports_free_then_stores() {
        let store = InMemoryClaimStore::new();
        store.race_next_lookup();
        let claim_id = ClaimFixtures::claim_identifier();

        assert_eq!(store.find_by_claim_id(&claim_id).await.unwrap(), None);
        assert!(store.claim_id_exists(&claim_id).await.unwrap());

        let err = store
            .insert_claim(&ClaimFixtures::draft_record())
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_offline_store_reports_unhealthy() {
        let store = InMemoryClaimStore::new();
        store.fail_lookups();

        assert!(!store.health_check().await.is_healthy());
        let err = store
            .find_by_claim_id(&ClaimFixtures::claim_identifier())
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }
}
