use crate::error::{Result, StockroomError};
use crate::money::{Currency, Locale, MoneyFormat};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for stockroom, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Rows shown per page of the product table
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Locale used for price formatting (e.g. "es-PA", "en-US")
    #[serde(default)]
    pub locale: Locale,

    /// Currency prices are expressed in
    #[serde(default)]
    pub currency: Currency,

    /// Write the demonstration products when the collection is empty
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            currency: Currency::default(),
            seed_demo_data: true,
        }
    }
}

impl StockroomConfig {
    pub const KEYS: [&'static str; 4] = ["page-size", "locale", "currency", "seed-demo-data"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockroomError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content).map_err(StockroomError::Io)?;
        Ok(())
    }

    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat::new(self.locale, self.currency)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "locale" => Some(self.locale.to_string()),
            "currency" => Some(self.currency.to_string()),
            "seed-demo-data" => Some(self.seed_demo_data.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
                if size == 0 {
                    return Err("Page size must be at least 1".to_string());
                }
                self.page_size = size;
            }
            "locale" => self.locale = value.parse()?,
            "currency" => self.currency = value.parse()?,
            "seed-demo-data" => {
                self.seed_demo_data = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("Invalid boolean: {}", value)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
