//! Claims Domain
//!
//! This crate issues insurance claims: it draws the externally quoted claim
//! identifier (`CLA-NNNNN`) and the five-digit check code, and stores new
//! claims through a port so the backing store can be swapped.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft -> Finalized <-> Reopened
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::{generate_claim_id, generate_claim_check_code};
//!
//! let claim_id = generate_claim_id(&store).await?;
//! let check_code = generate_claim_check_code();
//! ```

pub mod claim;
pub mod config;
pub mod error;
pub mod generator;
pub mod ports;
pub mod services;

pub use claim::{ClaimDraft, ClaimRecord, ClaimStatus, ServiceType};
pub use config::ClaimsConfig;
pub use error::ClaimError;
pub use generator::{generate_claim_check_code, generate_claim_id, ClaimIdGenerator};
pub use ports::{ClaimLookupPort, ClaimStorePort};
pub use services::ClaimIssuanceService;
