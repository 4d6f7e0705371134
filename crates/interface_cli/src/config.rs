//! Issuer configuration

use serde::Deserialize;

use domain_claims::ClaimDraft;

/// What a single run of the issuer does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Print a free claim identifier and a check code without storing anything
    #[default]
    Generate,
    /// Store a new draft claim built from `draft`
    Issue,
}

/// Issuer configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    /// Database URL
    pub database_url: String,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Log level
    pub log_level: String,
    /// Run mode
    pub mode: Mode,
    /// Claim data, required for `Mode::Issue`
    pub draft: Option<ClaimDraft>,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/claims".to_string(),
            max_connections: 2,
            log_level: "info".to_string(),
            mode: Mode::Generate,
            draft: None,
        }
    }
}

impl IssuerConfig {
    /// Loads configuration from `ISSUER_*` environment variables
    ///
    /// Draft fields are nested with a double underscore, e.g.
    /// `ISSUER_DRAFT__MEMBER_NO`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("ISSUER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IssuerConfig::default();
        assert_eq!(config.mode, Mode::Generate);
        assert_eq!(config.log_level, "info");
        assert!(config.draft.is_none());
    }

    #[test]
    fn test_issue_mode_with_nested_draft() {
        let config: IssuerConfig = config::Config::builder()
            .set_override("mode", "issue")
            .unwrap()
            .set_override("draft.encounter_id", 17)
            .unwrap()
            .set_override("draft.physician_id", "SNO-101")
            .unwrap()
            .set_override("draft.member_no", "NHIS-1")
            .unwrap()
            .set_override("draft.created_by", 2)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.mode, Mode::Issue);
        let draft = config.draft.unwrap();
        assert_eq!(draft.encounter_id, 17);
        assert_eq!(draft.member_no, "NHIS-1");
        assert_eq!(config.database_url, "postgres://localhost/claims");
    }
}
