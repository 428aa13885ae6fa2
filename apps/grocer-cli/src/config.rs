//! # Configuration
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-file`)
//! 2. Environment variables (`GROCER_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Data file override. `None` means the platform data directory.
    pub data_file: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for AppConfig {
    /// Rupee display, platform data directory.
    fn default() -> Self {
        AppConfig {
            data_file: None,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCER_DATA_FILE`: Path of the JSON data file
    /// - `GROCER_CURRENCY_SYMBOL`: Symbol printed before amounts
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (environment, test map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("GROCER_DATA_FILE").filter(|p| !p.trim().is_empty()) {
            config.data_file = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("GROCER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_cli::config::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(40.0), "₹40");
    /// assert_eq!(config.format_currency(1.5), "₹1.5");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROCER_DATA_FILE", "/tmp/list.json"),
            ("GROCER_CURRENCY_SYMBOL", "Rs "),
        ]));
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/list.json")));
        assert_eq!(config.format_currency(75.0), "Rs 75");
    }

    #[test]
    fn test_blank_data_file_is_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("GROCER_DATA_FILE", "  ")]));
        assert_eq!(config.data_file, None);
    }
}
