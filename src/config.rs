//! Environment configuration for the HTTP service

use serde::Deserialize;

use crate::constants::DEFAULT_RPC_URL;
use crate::errors::{SolmapError, SolmapResult};

/// Service configuration, read from `SOLMAP_`-prefixed environment variables.
///
/// Recognized variables: `SOLMAP_RPC_URL` (falls back to the public
/// mainnet-beta endpoint) and `SOLMAP_PORT`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Ledger JSON-RPC endpoint to fetch blocks from.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// TCP port the HTTP server binds.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServiceConfig {
    /// Load the configuration from the environment.
    pub fn from_env() -> SolmapResult<Self> {
        let config = envy::prefixed("SOLMAP_").from_env::<Self>()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SolmapResult<()> {
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err(SolmapError::InvalidConfig(format!(
                "rpc_url must be an http(s) URL, got {:?}",
                self.rpc_url
            )));
        }
        if self.port == 0 {
            return Err(SolmapError::InvalidConfig(
                "port must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ServiceConfig {
            rpc_url: "ws://not-http".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = ServiceConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
