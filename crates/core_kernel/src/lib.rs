//! Core Kernel - Foundational types for the claim issuer
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Claim identifiers, both the internal UUID key and the human-readable
//!   `CLA-NNNNN` identifier with its five-digit check code
//! - Port infrastructure for the ports-and-adapters architecture
//! - Common error types

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{
    ClaimId, ClaimIdentifier, ClaimCheckCode, IdentifierError,
    FIVE_DIGIT_MIN, FIVE_DIGIT_MAX,
};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
pub use error::CoreError;
