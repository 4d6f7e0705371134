//! Claim identifier and check code generation
//!
//! A claim identifier is drawn at random from `CLA-10000..=CLA-99999` and
//! checked against the claim store; taken identifiers are redrawn. The check
//! is a read only, so two concurrent callers can still end up with the same
//! identifier. The storage layer's unique index on `claim_id` is what makes
//! identifiers unique in the end (see `ClaimIssuanceService`).

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use core_kernel::{ClaimCheckCode, ClaimIdentifier};

use crate::config::ClaimsConfig;
use crate::error::ClaimError;
use crate::ports::ClaimLookupPort;

/// Draws claim identifiers that are free in the store, and check codes
///
/// The random source is locked only while sampling, never across a store
/// lookup, so generation futures stay `Send`.
#[derive(Debug)]
pub struct ClaimIdGenerator {
    rng: Mutex<StdRng>,
    max_attempts: Option<u32>,
}

impl ClaimIdGenerator {
    /// Creates a generator seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator honoring the configured attempt cap
    pub fn from_config(config: &ClaimsConfig) -> Self {
        Self {
            max_attempts: config.max_id_attempts,
            ..Self::new()
        }
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            max_attempts: None,
        }
    }

    /// Caps the number of draws per `generate_claim_id` call
    pub fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = Some(max);
        self
    }

    /// Returns a claim identifier not present in the store at the time of the check
    ///
    /// Without an attempt cap this keeps drawing until a free identifier is
    /// found.
    ///
    /// # Errors
    ///
    /// - `ClaimError::Store` with the store's error, unchanged, as soon as a
    ///   lookup fails
    /// - `ClaimError::IdentifierSpaceExhausted` when a cap is set and every
    ///   draw was taken
    pub async fn generate_claim_id<S>(&self, store: &S) -> Result<ClaimIdentifier, ClaimError>
    where
        S: ClaimLookupPort + ?Sized,
    {
        let mut attempts: u32 = 0;
        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    warn!(attempts, "no free claim identifier within attempt cap");
                    return Err(ClaimError::IdentifierSpaceExhausted { attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let candidate = self.draw_identifier();
            if !store.claim_id_exists(&candidate).await? {
                debug!(claim_id = %candidate, attempts, "claim identifier generated");
                return Ok(candidate);
            }
            debug!(claim_id = %candidate, attempts, "claim identifier taken, drawing again");
        }
    }

    /// Returns a five-digit check code; no uniqueness check is made
    pub fn generate_claim_check_code(&self) -> ClaimCheckCode {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ClaimCheckCode::random_with(&mut *rng)
    }

    fn draw_identifier(&self) -> ClaimIdentifier {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ClaimIdentifier::random_with(&mut *rng)
    }
}

impl Default for ClaimIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a claim identifier not present in `store` at the time of the check
///
/// Uses a freshly seeded generator with no attempt cap.
pub async fn generate_claim_id<S>(store: &S) -> Result<ClaimIdentifier, ClaimError>
where
    S: ClaimLookupPort + ?Sized,
{
    ClaimIdGenerator::new().generate_claim_id(store).await
}

/// Returns a random five-digit claim check code
pub fn generate_claim_check_code() -> ClaimCheckCode {
    ClaimCheckCode::random_with(&mut rand::rng())
}
