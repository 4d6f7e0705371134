//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The claim store failed; the underlying error is passed through as-is
    #[error(transparent)]
    Store(#[from] PortError),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Only returned when a maximum number of attempts is configured
    #[error("No free claim identifier found after {attempts} attempts")]
    IdentifierSpaceExhausted { attempts: u32 },

    #[error("Claim insert kept conflicting on claim_id after {retries} retries")]
    WriteConflictsExhausted { retries: u32 },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl ClaimError {
    /// Returns the store error if this failure came from the claim store
    pub fn as_store_error(&self) -> Option<&PortError> {
        match self {
            ClaimError::Store(err) => Some(err),
            _ => None,
        }
    }
}
