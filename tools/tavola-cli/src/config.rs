//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tavola_ordering::Money;

/// CLI configuration file (`tavola.toml`).
///
/// Money fields are stored as strings so they parse through the exact
/// decimal path rather than a float.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Restaurant profile.
    #[serde(default)]
    pub restaurant: RestaurantConfig,
}

/// Restaurant profile settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// Restaurant display name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Delivery fee applied at session start (e.g., "2.50").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<String>,

    /// Minimum order subtotal; checkout warns below it (e.g., "15.00").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order: Option<String>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            delivery_fee: None,
            minimum_order: None,
        }
    }
}

fn default_name() -> String {
    "Tavola".to_string()
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find a config file in the directory tree, walking upward.
    pub fn find(start: &Path) -> Option<Self> {
        let config_names = ["tavola.toml", ".tavola.toml"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = Self::load(&config_path) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The configured delivery fee, if any.
    pub fn delivery_fee(&self) -> Result<Option<Money>> {
        parse_money_field("restaurant.delivery_fee", &self.restaurant.delivery_fee)
    }

    /// The configured minimum order subtotal, if any.
    pub fn minimum_order(&self) -> Result<Option<Money>> {
        parse_money_field("restaurant.minimum_order", &self.restaurant.minimum_order)
    }
}

fn parse_money_field(field: &str, value: &Option<String>) -> Result<Option<Money>> {
    match value {
        None => Ok(None),
        Some(s) => match Money::parse(s) {
            Some(money) => Ok(Some(money)),
            None => bail!("Invalid {} value: {}", field, s),
        },
    }
}
