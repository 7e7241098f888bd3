//! Configuration for the marketplace

use serde::{Deserialize, Serialize};

/// Marketplace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Metrics listen address
    pub metrics_listen_addr: String,

    /// Tutoring configuration
    pub tutoring: TutoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "edumarket".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            metrics_listen_addr: "0.0.0.0:9090".to_string(),
            tutoring: TutoringConfig::default(),
        }
    }
}

/// Tutoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutoringConfig {
    /// Highest accepted session rating (inclusive)
    pub max_rating: u8,
}

impl Default for TutoringConfig {
    fn default() -> Self {
        Self { max_rating: 5 }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(name) = std::env::var("MARKET_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(addr) = std::env::var("MARKET_METRICS_ADDR") {
            config.metrics_listen_addr = addr;
        }

        if let Ok(max) = std::env::var("MARKET_MAX_RATING") {
            config.tutoring.max_rating = max
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid MARKET_MAX_RATING: {}", e)))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "edumarket");
        assert_eq!(config.tutoring.max_rating, 5);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
service_name = "edumarket-test"
service_version = "0.0.1"
metrics_listen_addr = "127.0.0.1:9100"

[tutoring]
max_rating = 10
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.service_name, "edumarket-test");
        assert_eq!(config.tutoring.max_rating, 10);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
