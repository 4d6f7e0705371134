//! Claim Issuer Command Line
//!
//! Operator entry point: either prints a free claim identifier with a check
//! code, or issues a draft claim, against the PostgreSQL claim store.
//!
//! # Example
//!
//! ```bash
//! ISSUER_DATABASE_URL=postgres://localhost/claims cargo run --bin claim-issuer
//! ```

pub mod commands;
pub mod config;

pub use commands::{run, RunOutput};
pub use config::{IssuerConfig, Mode};
