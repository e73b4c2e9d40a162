use std::fs;
use std::path::{Path, PathBuf};

use super::{seed, CatalogStore, Datasets};
use crate::error::{Result, ShelfzError};

/// File-backed catalog store. One JSON document holds all three relations.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfzError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Datasets> {
        if !self.path.exists() {
            return Ok(seed::datasets());
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfzError::Io)?;
        let data: Datasets = serde_json::from_str(&content).map_err(ShelfzError::Serialization)?;
        Ok(data)
    }

    fn save(&mut self, data: &Datasets) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(data).map_err(ShelfzError::Serialization)?;
        fs::write(&self.path, content).map_err(ShelfzError::Io)?;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
