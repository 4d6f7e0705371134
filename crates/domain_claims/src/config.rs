//! Claims configuration

use serde::Deserialize;

/// Tuning for identifier generation and claim issuance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClaimsConfig {
    /// Cap on identifier draws per call; `None` keeps drawing until a free
    /// identifier turns up
    pub max_id_attempts: Option<u32>,
    /// How many times issuance requests a fresh identifier after the store
    /// rejects an insert as a duplicate
    pub max_write_retries: u32,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            max_id_attempts: None,
            max_write_retries: 3,
        }
    }
}

impl ClaimsConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unbounded() {
        let config = ClaimsConfig::default();
        assert_eq!(config.max_id_attempts, None);
        assert_eq!(config.max_write_retries, 3);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: ClaimsConfig = config::Config::builder()
            .set_override("max_id_attempts", 500)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.max_id_attempts, Some(500));
        assert_eq!(config.max_write_retries, 3);
    }
}
