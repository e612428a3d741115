//! Configuration types.

use std::path::PathBuf;

use crate::catalog::Locale;
use crate::error::ConfigError;

/// Application configuration for the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON storage file.
    pub data_path: PathBuf,
    /// Presentation language for catalog text.
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/invest-journey.json"),
            locale: Locale::default(),
        }
    }
}

impl AppConfig {
    /// Build a config from `INVEST_JOURNEY_DATA` and `INVEST_JOURNEY_LOCALE`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("INVEST_JOURNEY_DATA") {
            config.data_path = PathBuf::from(path);
        }
        if let Ok(locale) = std::env::var("INVEST_JOURNEY_LOCALE") {
            config.locale = locale
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "INVEST_JOURNEY_LOCALE".to_string(),
                    message,
                })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.locale, Locale::En);
        assert!(config.data_path.ends_with("invest-journey.json"));
    }
}
