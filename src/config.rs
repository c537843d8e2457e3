//! Store settings printed on receipts and used for tax.

use crate::checkout::TaxRate;
use thiserror::Error;

pub const DEFAULT_STORE_NAME: &str = "APOTEK MINI POS";
pub const DEFAULT_STORE_ADDRESS: &str = "Jl. Contoh No. 123, Jakarta";
pub const DEFAULT_STORE_PHONE: &str = "(021) 12345678";
pub const DEFAULT_CASHIER: &str = "Staff Apotek";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole percentage between 0 and 100, got {value:?}")]
    InvalidTaxPercent { var: &'static str, value: String },

    #[error("{var} must not be blank")]
    Blank { var: &'static str },
}

/// Store identity and pricing settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub store_name: String,
    pub address: String,
    pub phone: String,
    /// Name printed on the `Kasir:` line.
    pub cashier: String,
    pub tax_rate: TaxRate,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.into(),
            address: DEFAULT_STORE_ADDRESS.into(),
            phone: DEFAULT_STORE_PHONE.into(),
            cashier: DEFAULT_CASHIER.into(),
            tax_rate: TaxRate::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `APOTEK_STORE_NAME`    | `APOTEK MINI POS`             |
    /// | `APOTEK_STORE_ADDRESS` | `Jl. Contoh No. 123, Jakarta` |
    /// | `APOTEK_STORE_PHONE`   | `(021) 12345678`              |
    /// | `APOTEK_CASHIER`       | `Staff Apotek`                |
    /// | `APOTEK_TAX_PERCENT`   | `10`                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let text = |var: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Blank { var }),
                Some(value) => Ok(value.trim().to_string()),
            }
        };

        let tax_rate = match lookup("APOTEK_TAX_PERCENT") {
            None => defaults.tax_rate,
            Some(value) => value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|p| *p <= 100)
                .map(TaxRate::percent)
                .ok_or(ConfigError::InvalidTaxPercent {
                    var: "APOTEK_TAX_PERCENT",
                    value,
                })?,
        };

        Ok(Self {
            store_name: text("APOTEK_STORE_NAME", defaults.store_name)?,
            address: text("APOTEK_STORE_ADDRESS", defaults.address)?,
            phone: text("APOTEK_STORE_PHONE", defaults.phone)?,
            cashier: text("APOTEK_CASHIER", defaults.cashier)?,
            tax_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), StoreConfig::default());
        assert_eq!(StoreConfig::default().tax_rate.as_percent(), 10);
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = load(&[("APOTEK_CASHIER", " Rina "), ("APOTEK_TAX_PERCENT", "11")]).unwrap();
        assert_eq!(config.cashier, "Rina");
        assert_eq!(config.tax_rate.as_percent(), 11);
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            load(&[("APOTEK_TAX_PERCENT", "sepuluh")]),
            Err(ConfigError::InvalidTaxPercent { .. })
        ));
        assert!(matches!(
            load(&[("APOTEK_TAX_PERCENT", "150")]),
            Err(ConfigError::InvalidTaxPercent { .. })
        ));
        assert_eq!(
            load(&[("APOTEK_STORE_NAME", "  ")]),
            Err(ConfigError::Blank {
                var: "APOTEK_STORE_NAME"
            })
        );
    }
}
