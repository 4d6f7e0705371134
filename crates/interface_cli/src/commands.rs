//! Issuer commands

use serde::Serialize;

use core_kernel::{ClaimCheckCode, ClaimIdentifier};
use domain_claims::{ClaimError, ClaimIssuanceService, ClaimRecord, ClaimStorePort};

use crate::config::{IssuerConfig, Mode};

/// Result of one issuer run, printed as JSON
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RunOutput {
    Generate {
        claim_id: ClaimIdentifier,
        claim_check_code: ClaimCheckCode,
    },
    Issue {
        claim: ClaimRecord,
    },
}

/// Runs the configured mode against `service`
///
/// # Errors
///
/// `ClaimError::MissingRequiredField` when issuing without a draft, otherwise
/// whatever the claims domain reports.
pub async fn run<S>(
    config: &IssuerConfig,
    service: &ClaimIssuanceService<S>,
) -> Result<RunOutput, ClaimError>
where
    S: ClaimStorePort + ?Sized,
{
    match config.mode {
        Mode::Generate => {
            let claim_id = service.generator().generate_claim_id(service.store()).await?;
            let claim_check_code = service.generator().generate_claim_check_code();
            Ok(RunOutput::Generate {
                claim_id,
                claim_check_code,
            })
        }
        Mode::Issue => {
            let draft = config
                .draft
                .clone()
                .ok_or_else(|| ClaimError::MissingRequiredField("draft".to_string()))?;
            let claim = service.issue_claim(draft).await?;
            Ok(RunOutput::Issue { claim })
        }
    }
}
