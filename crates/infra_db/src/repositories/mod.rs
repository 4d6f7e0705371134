//! Repository implementations
//!
//! Repositories encapsulate SQL and return plain row types; the adapters in
//! `crate::adapters` map rows onto domain types.

pub mod claims;

pub use claims::{ClaimRow, ClaimsRepository};
