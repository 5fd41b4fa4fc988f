//! Loading and saving the zoom settings.

use crate::settings::ZoomSettings;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or saving the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no user config directory on this platform")]
    NoConfigDir,
    #[error("settings file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the controller reads and writes its settings.
///
/// Implemented for the JSON file store below; tests swap in an in-memory
/// store to count writes.
pub trait ConfigStore {
    /// Loads the settings, or `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ZoomSettings>, ConfigError>;

    /// Persists the whole settings blob.
    fn save(&mut self, settings: &ZoomSettings) -> Result<(), ConfigError>;
}

/// Settings persisted as pretty-printed JSON at a fixed path.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default settings location: `<config_dir>/deckzoom/zoom.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("deckzoom").join("zoom.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Option<ZoomSettings>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&mut self, settings: &ZoomSettings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        log::debug!("saved zoom settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_of_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("zoom.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonConfigStore::new(dir.path().join("nested").join("zoom.json"));

        let settings = ZoomSettings {
            overview_zoom: 1.25,
            overview_zoom_default: 1.0,
            review_zoom: 0.8,
            review_zoom_default: 1.1,
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoom.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonConfigStore::new(path);
        assert!(matches!(store.load(), Err(ConfigError::Json(_))));
    }
}
