//! Settings manager for loading, saving, and atomic updates.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Creation with defaults when the resource is missing
//! - Cleanup of unknown top-level keys on load

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the application settings resource.
///
/// Handles loading, saving, and directory creation.
pub struct SettingsManager {
    /// Path to the settings file.
    settings_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl SettingsManager {
    /// Create a new manager with the given settings file path.
    ///
    /// Does not load the file - call `load()` or `load_or_create()` after.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the settings file path.
    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Note: Changes made here are only in memory until `save()` is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load settings from file.
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.settings_path.exists() {
            return Err(ConfigError::NotFound(self.settings_path.clone()));
        }

        let content = fs::read_to_string(&self.settings_path)?;
        self.settings = serde_json::from_str(&content)?;
        Ok(())
    }

    /// Load settings from file, creating with defaults if it doesn't exist.
    ///
    /// Also normalizes the file: unknown top-level keys are dropped and
    /// missing keys are filled in with defaults, saving back if the content
    /// changed.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.settings_path.exists() {
            let content = fs::read_to_string(&self.settings_path)?;
            let (settings, was_modified) = parse_and_clean(&content)?;
            self.settings = settings;

            // Save back if we had to clean anything up
            if was_modified {
                self.save()?;
            }
        } else {
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Ensure all configured directories exist.
    ///
    /// Creates the workspaces root and logs directories if they don't exist.
    /// Should be called after `load_or_create()`.
    pub fn ensure_dirs_exist(&self) -> ConfigResult<()> {
        let dirs = [
            &self.settings.paths.workspaces_root,
            &self.settings.paths.logs_folder,
        ];

        for dir in dirs {
            let path = PathBuf::from(dir);
            if !path.exists() {
                fs::create_dir_all(&path)?;
            }
        }

        Ok(())
    }

    /// Get the logs folder path.
    pub fn logs_folder(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.logs_folder)
    }

    /// Save the settings atomically.
    ///
    /// Writes to a temp file first, then renames to ensure an atomic write.
    pub fn save(&self) -> ConfigResult<()> {
        let mut content = serde_json::to_string_pretty(&self.settings)?;
        content.push('\n');
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Write content to the settings file atomically.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        // Create parent directory if needed
        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to temp file in same directory (for atomic rename)
        let temp_path = self.settings_path.with_extension("json.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.settings_path)?;

        Ok(())
    }
}

/// Parse settings content, reporting whether a rewrite is needed.
///
/// A rewrite is needed when the file carries unknown top-level keys or when
/// missing keys had to be filled in with defaults.
fn parse_and_clean(content: &str) -> ConfigResult<(Settings, bool)> {
    let settings: Settings = serde_json::from_str(content)?;

    let known_keys = ["app-name", "paths", "deployment", "window", "log-level"];
    let value: serde_json::Value = serde_json::from_str(content)?;
    let has_unknown = value
        .as_object()
        .map(|map| map.keys().any(|key| !known_keys.contains(&key.as_str())))
        .unwrap_or(false);

    // If the content re-serializes differently, we had missing defaults
    let reserialized = serde_json::to_string_pretty(&settings)?;
    let was_modified = has_unknown || content.trim() != reserialized.trim();

    Ok((settings, was_modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_APP_NAME;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut manager = SettingsManager::new(&path);
        let result = manager.load();
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not valid json").unwrap();

        let mut manager = SettingsManager::new(&path);
        let result = manager.load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_or_create_creates_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut manager = SettingsManager::new(&path);
        manager.load_or_create().unwrap();

        assert!(path.exists());
        assert_eq!(manager.settings().app_name, DEFAULT_APP_NAME);

        // The created file round-trips
        let mut second = SettingsManager::new(&path);
        second.load().unwrap();
        assert_eq!(second.settings().app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn load_or_create_preserves_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{ "app-name": "MyApp" }"#).unwrap();

        let mut manager = SettingsManager::new(&path);
        manager.load_or_create().unwrap();

        assert_eq!(manager.settings().app_name, "MyApp");
    }

    #[test]
    fn load_or_create_drops_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{ "app-name": "MyApp", "stale-key": 1 }"#).unwrap();

        let mut manager = SettingsManager::new(&path);
        manager.load_or_create().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("MyApp"));
        assert!(!content.contains("stale-key"));
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut manager = SettingsManager::new(&path);
        manager.load_or_create().unwrap();

        let temp_path = path.with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn ensure_dirs_exist_creates_folders() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut manager = SettingsManager::new(&path);
        manager.load_or_create().unwrap();
        manager.settings_mut().paths.workspaces_root =
            dir.path().join("ws").to_string_lossy().to_string();
        manager.settings_mut().paths.logs_folder =
            dir.path().join("lg").to_string_lossy().to_string();

        manager.ensure_dirs_exist().unwrap();

        assert!(dir.path().join("ws").is_dir());
        assert!(dir.path().join("lg").is_dir());
    }
}
