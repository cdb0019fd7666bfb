use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing application configuration, persisted as a TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default config if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Catalogue data settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_title() -> String {
    "University of Airthrey Museum".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("treasures.txt")
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
