//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use identity_client::{Credential, IdentityConfig};
use secrecy::SecretString;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Identity backend configuration
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Caller session
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Bearer credential for the identity service
    #[serde(default)]
    pub credential: Option<SecretString>,
}

impl SessionConfig {
    /// The configured credential, or an anonymous one.
    pub fn credential(&self) -> Credential {
        self.credential
            .clone()
            .map(Credential::from)
            .unwrap_or_else(Credential::anonymous)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_env(config::Environment::default())
    }

    /// Build configuration from an environment source.
    ///
    /// Keys are `SECTION__FIELD`, e.g. `IDENTITY__MOCK_SERVICES=true`.
    pub fn from_env(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
