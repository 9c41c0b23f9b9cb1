use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use serde::Deserialize;

/// Local durable key/value store location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory relative to the config dir
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.dir);
        if self.dir.trim().is_empty() || path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative, non-empty and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
