use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ShelfzError};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Configuration for shelfz, stored in .shelfz/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfzConfig {
    /// File name of the catalog document inside the data directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Render category cells as "icon - title" instead of the bare title
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

fn default_show_icons() -> bool {
    true
}

impl Default for ShelfzConfig {
    fn default() -> Self {
        Self {
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            show_icons: true,
        }
    }
}

impl ShelfzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfzError::Io)?;
        let config: ShelfzConfig =
            serde_json::from_str(&content).map_err(ShelfzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfzError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfzError::Io)?;
        Ok(())
    }

    pub fn catalog_file(&self) -> &str {
        &self.catalog_file
    }

    pub fn set_catalog_file(&mut self, name: &str) {
        self.catalog_file = name.to_string();
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    pub fn set_show_icons(&mut self, on: bool) {
        self.show_icons = on;
    }
}
