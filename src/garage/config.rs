use crate::error::{GarageError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";

/// Configuration for garage, stored next to the data file as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarageConfig {
    /// Symbol printed in front of prices (e.g., "$", "EUR ")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl GarageConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GarageError::Io)?;
        let config: GarageConfig =
            serde_json::from_str(&content).map_err(GarageError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GarageError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GarageError::Serialization)?;
        fs::write(config_path, content).map_err(GarageError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GarageConfig::default();
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = GarageConfig::load(dir.path()).unwrap();
        assert_eq!(config, GarageConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = GarageConfig::default();
        config.set("currency", "EUR ").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = GarageConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "EUR ");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = GarageConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = GarageConfig {
            currency: "£".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: GarageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
