//! Domain Adapters
//!
//! Adapter implementations of domain ports over the PostgreSQL repositories.

pub mod claims;

pub use claims::PostgresClaimStore;
