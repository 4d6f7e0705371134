//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim issuer test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim data
//! - `memory`: In-memory claim store with failure injection
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Format assertions for identifiers and check codes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod memory;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use memory::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
