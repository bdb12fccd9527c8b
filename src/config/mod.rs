// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Well-known provider variables (DEEPSEEK_API_KEY, ...) (highest)
    /// 2. Environment variables (prefix: IMG_ALT_)
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// CLI overrides are applied by the caller on top of the result.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(
                File::with_name(&Self::default_config_path())
                    .required(false)
            )
            // Override with environment variables (prefix: IMG_ALT_)
            .add_source(
                Environment::with_prefix("IMG_ALT")
                    .separator("__")
            )
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        // The original deployment configured the service through these bare
        // variable names; they keep working and win over the generic mapping.
        if let Ok(key) = std::env::var("DEEPSEEK_API_KEY") {
            config.deepseek.api_key = key;
        }
        if let Ok(model) = std::env::var("DEEPSEEK_MODEL") {
            config.deepseek.model = model;
        }
        if let Ok(limit) = std::env::var("UPLOAD_LIMIT") {
            config.upload.limit_bytes = limit
                .parse()
                .map_err(|_| RelayError::Config(format!("UPLOAD_LIMIT is not a byte count: {limit}")))?;
        }

        Ok(config)
    }

    /// Reject configurations the service cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.deepseek.api_key.is_empty() {
            return Err(RelayError::Config(
                "no API key configured; set DEEPSEEK_API_KEY or deepseek.api_key".to_string(),
            ));
        }
        if self.upload.limit_bytes == 0 {
            return Err(RelayError::Config(
                "upload.limit_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".img-alt-api")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.deepseek.model, "deepseek-vision");
        assert_eq!(config.upload.limit_bytes, 10 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_err());

        config.deepseek.api_key = "sk-test".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let mut config = AppConfig::default();
        config.deepseek.api_key = "sk-test".to_string();
        config.upload.limit_bytes = 0;
        assert!(config.validate().is_err());
    }
}
