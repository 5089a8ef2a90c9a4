//! Identity client configuration.

use serde::Deserialize;
use std::time::Duration;

/// Identity backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Identity service base URL
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Use the in-process mock instead of the remote service
    #[serde(default)]
    pub mock_services: bool,

    /// Request timeout for the remote service
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Artificial latency of every mock operation
    #[serde(default = "default_mock_latency", with = "humantime_serde")]
    pub mock_latency: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            mock_services: false,
            timeout: default_timeout(),
            mock_latency: default_mock_latency(),
        }
    }
}

impl IdentityConfig {
    /// Configuration for the mock backend with the given latency.
    pub fn mock(latency: Duration) -> Self {
        Self {
            mock_services: true,
            mock_latency: latency,
            ..Self::default()
        }
    }

    /// Configuration for a remote backend at `service_url`.
    pub fn remote(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Self::default()
        }
    }
}

fn default_service_url() -> String {
    "http://localhost:8000".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_mock_latency() -> Duration {
    Duration::from_secs(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IdentityConfig::default();
        assert_eq!(config.service_url, "http://localhost:8000");
        assert!(!config.mock_services);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.mock_latency, Duration::from_secs(1));
    }

    #[test]
    fn test_deserialize_humantime() {
        let json = r#"{"mock_services": true, "mock_latency": "250ms", "timeout": "5s"}"#;
        let config: IdentityConfig = serde_json::from_str(json).unwrap();
        assert!(config.mock_services);
        assert_eq!(config.mock_latency, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.service_url, "http://localhost:8000");
    }
}
