//! # Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Config file (`foodcourt.toml` in the working directory, optional)
//! 2. Defaults (this file)
//!
//! The menu itself is not configurable; only the store header, the tax rate
//! and the file locations are.
//!
//! ## Example `foodcourt.toml`
//! ```toml
//! tax_rate_bps = 900
//! receipt_path = "bill.txt"
//! activity_log_path = "activity_log.txt"
//!
//! [store]
//! name = "Ohlone College Food Court"
//! phone = "(510) 659-6000"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use foodcourt_core::{StoreInfo, TaxRate, SALES_TAX_RATE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "foodcourt.toml";

/// Largest accepted tax rate (100%).
const MAX_TAX_RATE_BPS: u32 = 10_000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header printed on the menu and the receipt.
    pub store: StoreInfo,

    /// Sales tax for non-students in basis points (900 = 9%).
    pub tax_rate_bps: u32,

    /// Where the receipt is saved (overwritten on every run).
    pub receipt_path: PathBuf,

    /// Where activity is appended.
    pub activity_log_path: PathBuf,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Store: Ohlone College Food Court
    /// - Tax: 9%
    /// - Receipt: `bill.txt`
    /// - Activity log: `activity_log.txt`
    fn default() -> Self {
        AppConfig {
            store: StoreInfo::default(),
            tax_rate_bps: SALES_TAX_RATE.bps(),
            receipt_path: PathBuf::from("bill.txt"),
            activity_log_path: PathBuf::from("activity_log.txt"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => AppConfig::from_toml_str(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses and validates TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate_bps > MAX_TAX_RATE_BPS {
            return Err(ConfigError::InvalidValue {
                key: "tax_rate_bps".to_string(),
                reason: format!("must be between 0 and {MAX_TAX_RATE_BPS}"),
            });
        }

        if self.receipt_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "receipt_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tax_rate(), SALES_TAX_RATE);
        assert_eq!(config.receipt_path, PathBuf::from("bill.txt"));
        assert_eq!(config.store.name, "Ohlone College Food Court");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            receipt_path = "receipts/latest.txt"

            [store]
            name = "Night Market"
            "#,
        )
        .unwrap();

        assert_eq!(config.receipt_path, PathBuf::from("receipts/latest.txt"));
        assert_eq!(config.store.name, "Night Market");
        assert_eq!(config.store.phone, "(510) 659-6000");
        assert_eq!(config.tax_rate_bps, 900);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_toml_str("tax_rate_bps = 20000"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_toml_str("tax_rate_bps = \"nine\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tax_rate_bps = 825\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.tax_rate().bps(), 825);
    }
}
