//! Window chrome resolution.
//!
//! Reads the settings resource once, before any UI exists, to decide the
//! window title, icon, and geometry. Failures never escape: a missing file
//! falls back to the default chrome, anything else to a minimal geometry-only
//! chrome. The authoritative settings load happens later, inside setup.

use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui;

use omw_core::config::{ConfigError, SettingsManager, WindowSettings, DEFAULT_APP_NAME};
use omw_core::logging::LogLevel;

/// Window icon asset, resolved relative to the working directory.
pub const DEFAULT_ICON_PATH: &str = "assets/logo.png";

/// Resolved window chrome, applied exactly once at startup.
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    /// Window title.
    pub title: String,
    /// Icon asset path; `None` in the minimal fallback (or when the asset is
    /// absent at load time).
    pub icon_path: Option<PathBuf>,
    /// Window geometry.
    pub window: WindowSettings,
    /// Logs directory from the settings, when they loaded.
    pub logs_dir: Option<PathBuf>,
    /// Log level from the settings, when they loaded.
    pub log_level: Option<LogLevel>,
}

impl ChromeConfig {
    /// Resolve chrome from the settings resource.
    ///
    /// - resource present and well-formed: title from `app-name`
    /// - resource missing: full fallback chrome with the default name
    /// - resource unreadable or malformed: minimal fallback (geometry only);
    ///   the problem is reported on stderr since logging is not up yet
    pub fn resolve(settings_path: &Path) -> Self {
        let mut manager = SettingsManager::new(settings_path);
        match manager.load() {
            Ok(()) => {
                let settings = manager.settings();
                Self {
                    title: settings.app_name.clone(),
                    icon_path: Some(PathBuf::from(DEFAULT_ICON_PATH)),
                    window: settings.window.clone(),
                    logs_dir: Some(PathBuf::from(&settings.paths.logs_folder)),
                    log_level: Some(settings.log_level),
                }
            }
            Err(ConfigError::NotFound(_)) => Self {
                title: DEFAULT_APP_NAME.to_string(),
                icon_path: Some(PathBuf::from(DEFAULT_ICON_PATH)),
                window: WindowSettings::default(),
                logs_dir: None,
                log_level: None,
            },
            Err(err) => {
                eprintln!("Warning: failed to load settings for window chrome: {err}");
                Self {
                    title: DEFAULT_APP_NAME.to_string(),
                    icon_path: None,
                    window: WindowSettings::default(),
                    logs_dir: None,
                    log_level: None,
                }
            }
        }
    }

    /// Build the eframe options for this chrome.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let mut viewport = egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size([self.window.width, self.window.height])
            .with_min_inner_size([self.window.min_width, self.window.min_height]);

        if let Some(icon) = self.icon_path.as_deref().and_then(load_window_icon) {
            viewport = viewport.with_icon(icon);
        }

        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}

/// Decode a window icon from a PNG file, if it exists.
fn load_window_icon(path: &Path) -> Option<egui::IconData> {
    let bytes = fs::read(path).ok()?;
    let image = image::load_from_memory(&bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn well_formed_settings_title_is_app_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "app-name": "MyApp" }"#).unwrap();

        let chrome = ChromeConfig::resolve(&path);
        assert_eq!(chrome.title, "MyApp");
        assert!(chrome.icon_path.is_some());
        assert!(chrome.logs_dir.is_some());
    }

    #[test]
    fn missing_settings_fall_back_to_default_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let chrome = ChromeConfig::resolve(&path);
        assert_eq!(chrome.title, DEFAULT_APP_NAME);
        // Full fallback still carries the icon
        assert!(chrome.icon_path.is_some());
        assert!(chrome.logs_dir.is_none());
    }

    #[test]
    fn malformed_settings_use_minimal_chrome() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ broken json").unwrap();

        let chrome = ChromeConfig::resolve(&path);
        assert_eq!(chrome.title, DEFAULT_APP_NAME);
        assert!(chrome.icon_path.is_none());
        assert_eq!(chrome.window.width, WindowSettings::default().width);
    }

    #[test]
    fn window_icon_decodes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        image::RgbaImage::new(2, 2).save(&path).unwrap();

        let icon = load_window_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (2, 2));
        assert_eq!(icon.rgba.len(), 16);
    }

    #[test]
    fn absent_icon_is_none() {
        assert!(load_window_icon(Path::new("does/not/exist.png")).is_none());
    }
}
