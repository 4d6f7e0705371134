//! Claims domain services
//!
//! The issuance service is the caller the generator expects: it persists the
//! generated values and reacts to a write-time uniqueness conflict by asking
//! for a new identifier.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::ClaimIdentifier;

use crate::claim::{ClaimDraft, ClaimRecord};
use crate::config::ClaimsConfig;
use crate::error::ClaimError;
use crate::generator::ClaimIdGenerator;
use crate::ports::ClaimStorePort;

/// Creates claims and moves them through their lifecycle
pub struct ClaimIssuanceService<S: ClaimStorePort + ?Sized> {
    store: Arc<S>,
    generator: ClaimIdGenerator,
    max_write_retries: u32,
}

impl<S: ClaimStorePort + ?Sized> ClaimIssuanceService<S> {
    /// Creates a service with default configuration
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, &ClaimsConfig::default())
    }

    /// Creates a service from configuration
    pub fn with_config(store: Arc<S>, config: &ClaimsConfig) -> Self {
        Self {
            store,
            generator: ClaimIdGenerator::from_config(config),
            max_write_retries: config.max_write_retries,
        }
    }

    /// Replaces the identifier generator
    pub fn with_generator(mut self, generator: ClaimIdGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Returns the generator used for new claims
    pub fn generator(&self) -> &ClaimIdGenerator {
        &self.generator
    }

    /// Returns the backing claim store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates and stores a new draft claim
    ///
    /// If the store rejects the insert because another writer took the same
    /// `claim_id` first, a fresh identifier is generated and the insert is
    /// retried, at most `max_write_retries` times.
    ///
    /// # Errors
    ///
    /// - `ClaimError::MissingRequiredField` for an incomplete draft
    /// - `ClaimError::WriteConflictsExhausted` when every retry conflicted
    /// - `ClaimError::Store` for any other store failure
    pub async fn issue_claim(&self, draft: ClaimDraft) -> Result<ClaimRecord, ClaimError> {
        draft.validate()?;

        let mut retries = 0;
        loop {
            let claim_id = self.generator.generate_claim_id(&*self.store).await?;
            let check_code = self.generator.generate_claim_check_code();
            let record = ClaimRecord::draft(draft.clone(), claim_id, check_code);

            match self.store.insert_claim(&record).await {
                Ok(()) => {
                    info!(
                        claim_id = %record.claim_id,
                        encounter_id = record.encounter_id,
                        "claim issued"
                    );
                    return Ok(record);
                }
                Err(err) if err.is_conflict() => {
                    if retries >= self.max_write_retries {
                        warn!(claim_id = %claim_id, retries, "giving up on conflicting claim insert");
                        return Err(ClaimError::WriteConflictsExhausted { retries });
                    }
                    retries += 1;
                    warn!(claim_id = %claim_id, retries, "claim_id taken at insert, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Fetches a claim by its external identifier
    pub async fn get_claim(&self, claim_id: &ClaimIdentifier) -> Result<ClaimRecord, ClaimError> {
        self.store
            .find_by_claim_id(claim_id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))
    }

    /// Finalizes a draft or reopened claim
    pub async fn finalize_claim(&self, claim_id: &ClaimIdentifier) -> Result<ClaimRecord, ClaimError> {
        let mut claim = self.get_claim(claim_id).await?;
        claim.finalize()?;
        self.store.update_status(&claim).await?;
        info!(claim_id = %claim.claim_id, "claim finalized");
        Ok(claim)
    }

    /// Reopens a finalized claim for corrections
    pub async fn reopen_claim(&self, claim_id: &ClaimIdentifier) -> Result<ClaimRecord, ClaimError> {
        let mut claim = self.get_claim(claim_id).await?;
        claim.reopen()?;
        self.store.update_status(&claim).await?;
        info!(claim_id = %claim.claim_id, "claim reopened");
        Ok(claim)
    }
}
