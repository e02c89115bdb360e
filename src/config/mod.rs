#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::tmdb::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Fully resolved settings the service runs with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub timeout_seconds: Option<u64>,
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for AppConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("tmdb.api_key", &self.api_key)?;
        validation::validate_url("tmdb.base_url", &self.api_base_url)?;
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_range("server.port", self.port, 1, u16::MAX)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("tmdb.timeout_seconds", timeout, 1, 300)?;
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

/// One configuration layer (command line, environment or file). Unset values
/// fall through to the next layer in [`PartialConfig::or`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConfig {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub timeout_seconds: Option<u64>,
}

impl PartialConfig {
    pub fn or(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            api_key: self.api_key.or(fallback.api_key),
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            host: self.host.or(fallback.host),
            port: self.port.or(fallback.port),
            timeout_seconds: self.timeout_seconds.or(fallback.timeout_seconds),
        }
    }

    /// Applies defaults and validates. A missing API key is a start-up error.
    pub fn resolve(self) -> Result<AppConfig> {
        let api_key = validation::validate_required_field("tmdb.api_key", &self.api_key)?.clone();

        let config = AppConfig {
            api_key,
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            timeout_seconds: self.timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }
}
