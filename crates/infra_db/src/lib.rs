//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for issued claims, using SQLx.
//!
//! # Architecture
//!
//! - `repositories`: SQL against the `claims` table, returning row types
//! - `adapters`: implementations of the claims domain ports on top of the
//!   repositories
//!
//! The `claims.claim_id` column carries a unique index. It is the final
//! guard against two issuers persisting the same identifier; a violation is
//! reported to the domain as `PortError::Conflict`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! let store = PostgresClaimStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use adapters::PostgresClaimStore;
