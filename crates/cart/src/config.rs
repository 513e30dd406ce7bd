//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LUXE_DATA_DIR` - Directory for the file-backed cart store (default: `.luxe`)
//! - `LUXE_STORAGE_KEY` - Storage slot holding the cart (default: `luxeCart`)
//! - `LUXE_TAX_RATE` - Tax as a fraction (default: 0.08)
//! - `LUXE_FREE_SHIPPING_THRESHOLD` - Subtotal that ships free (default: 500)
//! - `LUXE_SHIPPING_FEE` - Flat fee below the threshold (default: 25.00)
//! - `LUXE_CATALOG` - Path to a product catalog JSON file

use std::path::PathBuf;
use std::str::FromStr;

use luxe_core::Price;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::pricing::PricingPolicy;
use crate::storage::DEFAULT_CART_KEY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding storage slot files
    pub data_dir: PathBuf,
    /// Storage slot holding the serialized cart
    pub storage_key: String,
    /// Tax and shipping rules
    pub pricing: PricingPolicy,
    /// Optional catalog file replacing the bundled one
    pub catalog_path: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".luxe"),
            storage_key: DEFAULT_CART_KEY.to_string(),
            pricing: PricingPolicy::default(),
            catalog_path: None,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("LUXE_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let storage_key = lookup("LUXE_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or(defaults.storage_key);

        let tax_rate = parse_optional::<Decimal>(&lookup, "LUXE_TAX_RATE")?
            .unwrap_or(defaults.pricing.tax_rate);
        if tax_rate.is_sign_negative() && !tax_rate.is_zero() {
            return Err(ConfigError::InvalidEnvVar(
                "LUXE_TAX_RATE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        let free_shipping_threshold =
            parse_optional::<Price>(&lookup, "LUXE_FREE_SHIPPING_THRESHOLD")?
                .unwrap_or(defaults.pricing.free_shipping_threshold);
        let shipping_fee = parse_optional::<Price>(&lookup, "LUXE_SHIPPING_FEE")?
            .unwrap_or(defaults.pricing.shipping_fee);

        let catalog_path = lookup("LUXE_CATALOG").map(PathBuf::from);

        Ok(Self {
            data_dir,
            storage_key,
            pricing: PricingPolicy {
                tax_rate,
                free_shipping_threshold,
                shipping_fee,
            },
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if it is set.
fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CartConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CartConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "luxeCart");
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.pricing.shipping_fee, "25".parse::<Price>().unwrap());
        assert_eq!(config.pricing.free_shipping_threshold, "500".parse::<Price>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("LUXE_DATA_DIR", "/tmp/luxe"),
            ("LUXE_STORAGE_KEY", "testCart"),
            ("LUXE_TAX_RATE", "0.05"),
            ("LUXE_FREE_SHIPPING_THRESHOLD", "250"),
            ("LUXE_SHIPPING_FEE", "9.99"),
            ("LUXE_CATALOG", "catalog.json"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/luxe"));
        assert_eq!(config.storage_key, "testCart");
        assert_eq!(config.pricing.tax_rate, Decimal::new(5, 2));
        assert_eq!(config.pricing.free_shipping_threshold, "250".parse::<Price>().unwrap());
        assert_eq!(config.pricing.shipping_fee, "9.99".parse::<Price>().unwrap());
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_blank_storage_key_falls_back() {
        let config = load(&[("LUXE_STORAGE_KEY", "  ")]).unwrap();
        assert_eq!(config.storage_key, "luxeCart");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("LUXE_TAX_RATE", "eight percent")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "LUXE_TAX_RATE"));

        assert!(load(&[("LUXE_TAX_RATE", "-0.1")]).is_err());
        assert!(load(&[("LUXE_SHIPPING_FEE", "-1")]).is_err());
        assert!(load(&[("LUXE_FREE_SHIPPING_THRESHOLD", "lots")]).is_err());
    }
}
