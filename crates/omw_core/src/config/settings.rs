//! Settings struct backing `settings.json`.
//!
//! The settings resource is a JSON object with kebab-case keys. The only key
//! other components depend on semantically is `app-name`; everything else
//! takes a default when missing so that a hand-edited or partial file still
//! loads.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Application name used when the settings resource is absent or silent.
pub const DEFAULT_APP_NAME: &str = "OpenMS Workbench";

/// Default settings resource file name, resolved relative to the working
/// directory at startup.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Root settings structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Display name of the application, used for the window title and the
    /// first navigation section label.
    pub app_name: String,

    /// Path-related settings.
    pub paths: PathSettings,

    /// Deployment mode and verification gating.
    pub deployment: DeploymentSettings,

    /// Initial window geometry.
    pub window: WindowSettings,

    /// Minimum log level for the application-wide subscriber.
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            paths: PathSettings::default(),
            deployment: DeploymentSettings::default(),
            window: WindowSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Directory configuration for workspaces and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PathSettings {
    /// Root folder under which per-user workspaces are created.
    pub workspaces_root: String,

    /// Folder for application log files.
    pub logs_folder: String,
}

fn default_workspaces_root() -> String {
    "workspaces".to_string()
}

fn default_logs_folder() -> String {
    "logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            workspaces_root: default_workspaces_root(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Deployment flags controlling the verification gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DeploymentSettings {
    /// True when the app serves a shared/hosted deployment rather than a
    /// single local user.
    pub online_deployment: bool,

    /// Require the human-verification gate before any page is dispatched.
    /// Only consulted when `online_deployment` is set.
    pub require_verification: bool,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            online_deployment: false,
            require_verification: true,
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            min_width: 800.0,
            min_height: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("app-name"));
        assert!(json.contains("workspaces-root"));
        assert!(json.contains("online-deployment"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = r#"{ "app-name": "MyApp" }"#;
        let parsed: Settings = serde_json::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.app_name, "MyApp");
        // Defaults applied for missing
        assert_eq!(parsed.paths.workspaces_root, "workspaces");
        assert!(!parsed.deployment.online_deployment);
        assert!(parsed.deployment.require_verification);
    }

    #[test]
    fn missing_app_name_uses_default() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.app_name, DEFAULT_APP_NAME);
    }
}
