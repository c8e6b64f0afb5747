//! Configuration management for OpenMS Workbench.
//!
//! This module provides:
//! - JSON-based settings (`settings.json`) with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use omw_core::config::SettingsManager;
//!
//! // Create manager and load (or create default) settings
//! let mut manager = SettingsManager::new("settings.json");
//! manager.load_or_create().unwrap();
//!
//! println!("Application name: {}", manager.settings().app_name);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigResult, SettingsManager};
pub use settings::{
    DeploymentSettings, PathSettings, Settings, WindowSettings, DEFAULT_APP_NAME,
    DEFAULT_SETTINGS_FILE,
};
