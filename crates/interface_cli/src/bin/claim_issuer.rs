//! Claim Issuer Binary
//!
//! # Environment Variables
//!
//! * `ISSUER_DATABASE_URL` - PostgreSQL connection string
//! * `ISSUER_MAX_CONNECTIONS` - Pool size (default: 2)
//! * `ISSUER_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `ISSUER_MODE` - `generate` (default) or `issue`
//! * `ISSUER_DRAFT__ENCOUNTER_ID`, `ISSUER_DRAFT__PHYSICIAN_ID`,
//!   `ISSUER_DRAFT__MEMBER_NO`, `ISSUER_DRAFT__CREATED_BY`, ... - claim data
//!   for `issue`
//! * `CLAIMS_MAX_ID_ATTEMPTS` - cap on identifier draws (default: unbounded)
//! * `CLAIMS_MAX_WRITE_RETRIES` - retries after an insert conflict (default: 3)

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::HealthCheckable;
use domain_claims::{ClaimIssuanceService, ClaimsConfig};
use infra_db::{create_pool, DatabaseConfig, PostgresClaimStore};
use interface_cli::IssuerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = IssuerConfig::from_env().context("invalid ISSUER_* configuration")?;
    let claims_config = ClaimsConfig::from_env().context("invalid CLAIMS_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(mode = ?config.mode, "Starting claim issuer");

    let pool = create_pool(
        DatabaseConfig::new(&config.database_url).max_connections(config.max_connections),
    )
    .await?;
    let store = Arc::new(PostgresClaimStore::new(pool));

    let health = store.health_check().await;
    if !health.is_healthy() {
        bail!(
            "claim store unavailable: {}",
            health.message.unwrap_or_default()
        );
    }

    let service = ClaimIssuanceService::with_config(Arc::clone(&store), &claims_config);
    let output = interface_cli::run(&config, &service).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so that stdout carries only the JSON result.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
