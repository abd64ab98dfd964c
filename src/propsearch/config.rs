use crate::error::{PropsearchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "£";

/// Configuration for propsearch, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file to load instead of the bundled sample listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            currency: default_currency(),
        }
    }
}

/// Keys accepted by the `config` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Catalog,
    Currency,
}

impl ConfigKey {
    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "catalog" => Ok(ConfigKey::Catalog),
            "currency" => Ok(ConfigKey::Currency),
            other => Err(PropsearchError::Api(format!(
                "Unknown config key '{}' (expected catalog or currency)",
                other
            ))),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PropsearchError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(PropsearchError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PropsearchError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PropsearchError::Serialization)?;
        fs::write(config_path, content).map_err(PropsearchError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Catalog => self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(bundled)".to_string()),
            ConfigKey::Currency => self.currency.clone(),
        }
    }

    /// Empty values reset the key to its default.
    pub fn set(&mut self, key: ConfigKey, value: &str) {
        let value = value.trim();
        match key {
            ConfigKey::Catalog => {
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            ConfigKey::Currency => {
                self.currency = if value.is_empty() {
                    default_currency()
                } else {
                    value.to_string()
                };
            }
        }
    }

    /// Formats a price the way list cards show it: `£1,150,000`.
    pub fn format_price(&self, price: u32) -> String {
        let digits = price.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("{}{}", self.currency, grouped)
    }
}
