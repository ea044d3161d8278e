//! # Configuration
//!
//! Settings are resolved in layers, later layers winning:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │  2. TOML file (--config, or $CABINET_CONFIG)                            │
//! │  3. Environment: CABINET_CATALOG, CABINET_MODE, CABINET_MARKUP,         │
//! │     CABINET_BUSINESS_NAME, CABINET_BUSINESS_PHONE,                      │
//! │     CABINET_BUSINESS_EMAIL                                              │
//! │  4. Command-line flags                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example file
//! ```toml
//! catalog = "prices/cabinets_price.xlsx"
//! mode = "markup"
//! markup_percent = 30.0
//! shipping_dollars = 100
//! layout = "landscape"
//!
//! [business]
//! name = "Mike Renovations LLC"
//! phone = "239-200-5772"
//! email = "contact@mikerenovations.com"
//! ```
//!
//! Loading only checks syntax. Markup range and fee options are checked by
//! `pricing_mode`, `shipping_fee` and `delivery_fee` when a session starts.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cabinet_core::validation::{validate_fee_dollars, validate_markup_percentage};
use cabinet_core::{Money, PricingMode, ValidationError};
use cabinet_invoice::{BusinessInfo, PageLayout};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::GlobalOptions;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CABINET_CONFIG";

/// Catalog file used when nothing else is configured.
pub const DEFAULT_CATALOG: &str = "cabinets_price.xlsx";

/// Which column of the price sheet drives the unit price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSetting {
    #[default]
    FlatDiscount,
    Markup,
}

impl FromStr for ModeSetting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "flat_discount" | "flat" => Ok(ModeSetting::FlatDiscount),
            "markup" => Ok(ModeSetting::Markup),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ModeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSetting::FlatDiscount => write!(f, "flat-discount"),
            ModeSetting::Markup => write!(f, "markup"),
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Price sheet (.xlsx workbook or CSV export)
    pub catalog: PathBuf,

    /// Pricing mode
    pub mode: ModeSetting,

    /// Markup percent, used in markup mode only
    pub markup_percent: f64,

    /// Shipping fee in whole dollars
    pub shipping_dollars: i64,

    /// Delivery fee in whole dollars
    pub delivery_dollars: i64,

    /// Invoice orientation
    pub layout: PageLayout,

    /// Printed in the invoice header
    pub business: BusinessInfo,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            mode: ModeSetting::FlatDiscount,
            markup_percent: 0.0,
            shipping_dollars: 0,
            delivery_dollars: 0,
            layout: PageLayout::Portrait,
            business: BusinessInfo::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file (if any), then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = env::var(CONFIG_ENV).ok().map(PathBuf::from);
        let config = match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    /// Applies `CABINET_*` variables found through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CABINET_CATALOG") {
            self.catalog = PathBuf::from(path);
        }

        if let Some(mode) = lookup("CABINET_MODE") {
            self.mode = mode
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CABINET_MODE".to_string()))?;
        }

        if let Some(markup) = lookup("CABINET_MARKUP") {
            self.markup_percent = markup
                .trim()
                .trim_end_matches('%')
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CABINET_MARKUP".to_string()))?;
        }

        if let Some(name) = lookup("CABINET_BUSINESS_NAME") {
            self.business.name = name;
        }
        if let Some(phone) = lookup("CABINET_BUSINESS_PHONE") {
            self.business.phone = phone;
        }
        if let Some(email) = lookup("CABINET_BUSINESS_EMAIL") {
            self.business.email = email;
        }

        Ok(self)
    }

    /// Applies command-line flags.
    pub fn apply_options(mut self, options: &GlobalOptions) -> Self {
        if let Some(path) = &options.catalog {
            self.catalog = path.clone();
        }
        if let Some(mode) = options.mode {
            self.mode = mode.into();
        }
        if let Some(markup) = options.markup {
            self.markup_percent = markup;
        }
        if let Some(shipping) = options.shipping {
            self.shipping_dollars = shipping;
        }
        if let Some(delivery) = options.delivery {
            self.delivery_dollars = delivery;
        }
        if let Some(layout) = options.layout {
            self.layout = layout.into();
        }
        self
    }

    /// Pricing mode with a validated markup.
    pub fn pricing_mode(&self) -> Result<PricingMode, ConfigError> {
        match self.mode {
            ModeSetting::FlatDiscount => {
                if self.markup_percent != 0.0 {
                    warn!(
                        markup = self.markup_percent,
                        "Markup ignored in flat-discount mode"
                    );
                }
                Ok(PricingMode::FlatDiscount)
            }
            ModeSetting::Markup => validate_markup_percentage(self.markup_percent)
                .map(PricingMode::Markup)
                .map_err(|source| ConfigError::Invalid {
                    key: "markup_percent",
                    source,
                }),
        }
    }

    pub fn shipping_fee(&self) -> Result<Money, ConfigError> {
        validate_fee_dollars(self.shipping_dollars, "shipping fee").map_err(
            |source| ConfigError::Invalid {
                key: "shipping_dollars",
                source,
            },
        )
    }

    pub fn delivery_fee(&self) -> Result<Money, ConfigError> {
        validate_fee_dollars(self.delivery_dollars, "delivery fee").map_err(
            |source| ConfigError::Invalid {
                key: "delivery_dollars",
                source,
            },
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid {key}: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog, PathBuf::from("cabinets_price.xlsx"));
        assert_eq!(config.pricing_mode().unwrap(), PricingMode::FlatDiscount);
        assert_eq!(config.shipping_fee().unwrap(), Money::zero());
        assert_eq!(config.business.name, "Mike Renovations LLC");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            mode = "markup"
            markup_percent = 30.0
            layout = "landscape"

            [business]
            name = "Gulf Coast Cabinets"
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, ModeSetting::Markup);
        assert_eq!(config.layout, PageLayout::Landscape);
        assert_eq!(config.business.name, "Gulf Coast Cabinets");
        assert_eq!(config.business.phone, "239-200-5772");
        assert_eq!(config.catalog, PathBuf::from(DEFAULT_CATALOG));
        assert_eq!(
            config.pricing_mode().unwrap().markup().bps(),
            3000
        );
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = AppConfig::default()
            .apply_env(env_of(&[
                ("CABINET_CATALOG", "/data/prices.csv"),
                ("CABINET_MODE", "markup"),
                ("CABINET_MARKUP", "25%"),
                ("CABINET_BUSINESS_EMAIL", "sales@example.com"),
            ]))
            .unwrap();

        assert_eq!(config.catalog, PathBuf::from("/data/prices.csv"));
        assert_eq!(config.mode, ModeSetting::Markup);
        assert_eq!(config.markup_percent, 25.0);
        assert_eq!(config.business.email, "sales@example.com");
        assert_eq!(config.business.name, "Mike Renovations LLC");
    }

    #[test]
    fn test_malformed_env_values() {
        let err = AppConfig::default()
            .apply_env(env_of(&[("CABINET_MODE", "wholesale")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CABINET_MODE");

        let err = AppConfig::default()
            .apply_env(env_of(&[("CABINET_MARKUP", "thirty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "CABINET_MARKUP"));
    }

    #[test]
    fn test_flags_win() {
        let options = GlobalOptions {
            catalog: Some(PathBuf::from("flag.csv")),
            mode: Some(crate::cli::ModeArg::Markup),
            markup: Some(15.0),
            shipping: Some(200),
            delivery: Some(400),
            layout: Some(crate::cli::LayoutArg::Landscape),
            ..GlobalOptions::default()
        };
        let config = AppConfig::default()
            .apply_env(env_of(&[("CABINET_CATALOG", "env.csv")]))
            .unwrap()
            .apply_options(&options);

        assert_eq!(config.catalog, PathBuf::from("flag.csv"));
        assert_eq!(config.pricing_mode().unwrap().markup().bps(), 1500);
        assert_eq!(config.shipping_fee().unwrap(), Money::from_dollars(200));
        assert_eq!(config.delivery_fee().unwrap(), Money::from_dollars(400));
        assert_eq!(config.layout, PageLayout::Landscape);
    }

    #[test]
    fn test_invalid_settings_rejected_on_use() {
        let config = AppConfig {
            mode: ModeSetting::Markup,
            markup_percent: 150.0,
            shipping_dollars: 150,
            ..AppConfig::default()
        };

        let err = config.pricing_mode().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "markup_percent", .. }));

        let err = config.shipping_fee().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "shipping_dollars", .. }));
        assert!(config.delivery_fee().is_ok());
    }

    #[test]
    fn test_huge_fee_is_a_config_error() {
        let config = AppConfig {
            shipping_dollars: 100_000_000_000_000_000,
            delivery_dollars: i64::MIN,
            ..AppConfig::default()
        };

        let err = config.shipping_fee().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "shipping_dollars", .. }));
        let err = config.delivery_fee().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "delivery_dollars", .. }));
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "markup_percent = \"lots\"").unwrap();
        assert!(matches!(
            AppConfig::from_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_mode_setting_parse() {
        assert_eq!("flat-discount".parse(), Ok(ModeSetting::FlatDiscount));
        assert_eq!("FLAT_DISCOUNT".parse(), Ok(ModeSetting::FlatDiscount));
        assert_eq!(" Markup ".parse(), Ok(ModeSetting::Markup));
        assert_eq!("retail".parse::<ModeSetting>(), Err(()));
        assert_eq!(ModeSetting::FlatDiscount.to_string(), "flat-discount");
    }
}
