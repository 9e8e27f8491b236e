// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::CurrencyTable;
use crate::filter::WeekStart;
use crate::fx::ConversionEstimator;
use crate::models::Currency;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.finboard", "Finboard", "finboard"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("reference currency '{0}' is not in the currency registry")]
    UnknownReference(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reference_currency: String,
    pub week_start: WeekStart,
    pub log_level: String,

    /// Replaces the built-in registry when present.
    pub currencies: Option<Vec<Currency>>,

    /// Merged over the built-in rate table.
    pub rates: BTreeMap<String, Decimal>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_currency: "USD".to_string(),
            week_start: WeekStart::default(),
            log_level: "warn".to_string(),
            currencies: None,
            rates: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn currency_table(&self) -> CurrencyTable {
        match &self.currencies {
            Some(list) => CurrencyTable::new(list.clone()),
            None => CurrencyTable::default(),
        }
    }

    /// Built-in USD rates, overlaid with `rates` (also USD-denominated), then
    /// rebased onto the reference currency.
    pub fn estimator(&self) -> ConversionEstimator {
        ConversionEstimator::default()
            .with_overrides(&self.rates)
            .rebased(&self.reference_currency)
    }

    pub fn validate(&self, currencies: &CurrencyTable) -> Result<(), ConfigError> {
        if !currencies.contains(&self.reference_currency) {
            return Err(ConfigError::UnknownReference(
                self.reference_currency.clone(),
            ));
        }
        Ok(())
    }
}

/// Platform config location, e.g. `~/.config/finboard/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.json"))
}

/// Load `path` (or the platform default). A missing file yields defaults; nothing is written.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                tracing::warn!("no home directory; using default config");
                return Ok(AppConfig::default());
            }
        },
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let mut cfg: AppConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
    cfg.reference_currency = cfg.reference_currency.trim().to_uppercase();
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load(Some(dir.path().join("nope.json").as_path())).unwrap();
        assert_eq!(cfg.reference_currency, "USD");
        assert_eq!(cfg.week_start, WeekStart::Sunday);
        assert!(!dir.path().join("nope.json").exists());
    }

    #[test]
    fn partial_file_merges_rates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "week_start": "monday", "reference_currency": "eur", "rates": { "CHF": "1.13" } }"#,
        )
        .unwrap();
        let cfg = load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.week_start, WeekStart::Monday);
        assert_eq!(cfg.reference_currency, "EUR");
        let fx = cfg.estimator();
        assert_eq!(fx.reference(), "EUR");
        assert_eq!(fx.rate("EUR"), Decimal::ONE);
        assert_eq!(
            fx.to_reference(Decimal::from(108), "CHF").round_dp(6),
            Decimal::from(113)
        );
    }

    #[test]
    fn bad_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn reference_must_be_registered() {
        let cfg = AppConfig {
            reference_currency: "XYZ".into(),
            ..AppConfig::default()
        };
        let err = cfg.validate(&cfg.currency_table()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownReference(_)));
    }
}
