//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PRINTPRO_LATENCY_MS` - Simulated store latency in milliseconds
//!   (default: 500)
//! - `PRINTPRO_SEED` - Whether to pre-populate the store with demo orders
//!   (`true`/`false`, default: true)
//! - `PRINTPRO_THEME` - Initial color theme (`light`/`dark`, default: light)

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::session::Theme;

const DEFAULT_LATENCY_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set to an unparseable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Artificial delay applied to every store operation.
    pub store_latency: Duration,
    /// Whether the store starts with the demo orders.
    pub seed_demo_data: bool,
    /// Theme the session starts with.
    pub theme: Theme,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            seed_demo_data: true,
            theme: Theme::Light,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable is set but
    /// unparseable. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("PRINTPRO_LATENCY_MS").ok(),
            env::var("PRINTPRO_SEED").ok(),
            env::var("PRINTPRO_THEME").ok(),
        )
    }

    fn from_vars(
        latency_ms: Option<String>,
        seed: Option<String>,
        theme: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = latency_ms {
            let ms: u64 = value.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("PRINTPRO_LATENCY_MS".to_owned(), value)
            })?;
            config.store_latency = Duration::from_millis(ms);
        }

        if let Some(value) = seed {
            config.seed_demo_data = match value.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar(
                        "PRINTPRO_SEED".to_owned(),
                        value,
                    ));
                }
            };
        }

        if let Some(value) = theme {
            config.theme = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PRINTPRO_THEME".to_owned(), value))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = StorefrontConfig::from_vars(None, None, None).unwrap();
        assert_eq!(config.store_latency, Duration::from_millis(500));
        assert!(config.seed_demo_data);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_parses_overrides() {
        let config = StorefrontConfig::from_vars(
            Some("0".to_owned()),
            Some("false".to_owned()),
            Some("dark".to_owned()),
        )
        .unwrap();
        assert_eq!(config.store_latency, Duration::ZERO);
        assert!(!config.seed_demo_data);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_rejects_unparseable_values() {
        let err = StorefrontConfig::from_vars(Some("fast".to_owned()), None, None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar("PRINTPRO_LATENCY_MS".to_owned(), "fast".to_owned())
        );
        assert!(StorefrontConfig::from_vars(None, Some("maybe".to_owned()), None).is_err());
        assert!(StorefrontConfig::from_vars(None, None, Some("sepia".to_owned())).is_err());
    }
}
