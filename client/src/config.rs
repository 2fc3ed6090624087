//! Verifier client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ClientError;

/// Configuration for the verifier service client.
///
/// Can be loaded from a TOML file via [`VerifierConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Base URL of the verifier service.
    #[serde(default = "default_verifier_url")]
    pub verifier_url: String,

    /// Overall request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_verifier_url() -> String {
    "http://127.0.0.1:8003".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            verifier_url: default_verifier_url(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl VerifierConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ClientError> {
        toml::from_str(s).map_err(|e| ClientError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = VerifierConfig::from_toml_str("").unwrap();
        assert_eq!(config.verifier_url, "http://127.0.0.1:8003");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn fields_override_defaults() {
        let config = VerifierConfig::from_toml_str(
            r#"
            verifier_url = "https://verifier.example.org"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.verifier_url, "https://verifier.example.org");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = VerifierConfig::from_toml_str("verifier_url = ").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
