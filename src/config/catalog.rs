//! Catalog configuration loading from catalog.toml
//!
//! The file carries the propagation settings used by the service facade and
//! the organizations, group companies and shared products that are seeded on
//! startup. Every section is optional; a missing file yields the defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Path used when `CATALOG_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// How propagation operations are executed
    #[serde(default)]
    pub propagation: PropagationSettings,
    /// Organizations to seed, parents listed before their children
    #[serde(default)]
    pub organizations: Vec<OrganizationConfig>,
    /// Group companies to seed
    #[serde(default)]
    pub group_companies: Vec<GroupCompanyConfig>,
    /// Shared products to seed
    #[serde(default)]
    pub shared_products: Vec<SharedProductConfig>,
}

/// Execution settings for the propagation engine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PropagationSettings {
    /// Wrap each multi-step write in a database transaction.
    /// Off by default: steps then run as independent statements.
    pub transactional: bool,
    /// Prefix for SKUs generated on promotion
    pub sku_prefix: String,
}

impl Default for PropagationSettings {
    fn default() -> Self {
        Self {
            transactional: false,
            sku_prefix: crate::core::sku::DEFAULT_SKU_PREFIX.to_string(),
        }
    }
}

/// Configuration for a single organization
#[derive(Debug, Deserialize, Clone)]
pub struct OrganizationConfig {
    /// Name of the organization, used as its seeding key
    pub name: String,
    /// Name of the parent organization, if any
    #[serde(default)]
    pub parent: Option<String>,
}

/// Configuration for a single group company
#[derive(Debug, Deserialize, Clone)]
pub struct GroupCompanyConfig {
    /// Display name, used as its seeding key
    pub name: String,
}

/// Configuration for a single shared product
#[derive(Debug, Deserialize, Clone)]
pub struct SharedProductConfig {
    /// Name of the owning organization
    pub organization: String,
    /// Product name
    pub name: String,
    /// Free-form description, empty when omitted
    #[serde(default)]
    pub description: String,
    /// Unit price, must be finite and non-negative
    pub price: f64,
    /// Seeding key; products whose SKU already exists are skipped
    pub sku: String,
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses catalog configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<CatalogConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog config: {e}"),
    })
}

/// Loads configuration from `CATALOG_CONFIG`, or ./catalog.toml.
///
/// A missing file is not an error; the defaults are returned instead.
pub fn load_default_config() -> Result<CatalogConfig> {
    let path =
        std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        warn!("No catalog config at {}, using defaults", path);
        return Ok(CatalogConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [propagation]
            transactional = true
            sku_prefix = "PROMO"

            [[organizations]]
            name = "Holdings"

            [[organizations]]
            name = "Retail"
            parent = "Holdings"

            [[group_companies]]
            name = "Logistics Co"

            [[shared_products]]
            organization = "Retail"
            name = "Widget"
            price = 9.99
            sku = "W-1"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert!(config.propagation.transactional);
        assert_eq!(config.propagation.sku_prefix, "PROMO");
        assert_eq!(config.organizations.len(), 2);
        assert!(config.organizations[0].parent.is_none());
        assert_eq!(config.organizations[1].parent.as_deref(), Some("Holdings"));
        assert_eq!(config.group_companies[0].name, "Logistics Co");
        assert_eq!(config.shared_products[0].price, 9.99);
        assert_eq!(config.shared_products[0].description, "");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.propagation, PropagationSettings::default());
        assert!(!config.propagation.transactional);
        assert!(config.organizations.is_empty());
        assert!(config.shared_products.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_config("[[organizations]]\nparent = 3");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("definitely/not/here/catalog.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
