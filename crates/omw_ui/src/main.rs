//! OpenMS Workbench - Main application entry point
//!
//! A desktop application wrapping mass-spectrometry command-line workflows:
//! upload input files, configure tool parameters, run the tools, and collect
//! the results, organized as a sidebar of workflow pages.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod chrome;
mod components;
mod pages;
mod runner;

use std::path::PathBuf;

use omw_core::config::DEFAULT_SETTINGS_FILE;
use omw_core::logging::{self, LogLevel};

use app::WorkbenchApp;
use chrome::ChromeConfig;

/// Default settings path, relative to the working directory.
fn default_settings_path() -> PathBuf {
    PathBuf::from(DEFAULT_SETTINGS_FILE)
}

fn main() -> Result<(), eframe::Error> {
    let settings_path = default_settings_path();

    // Window chrome must be resolved before any UI is created. This peeks at
    // the settings resource; the setup routine loads it authoritatively later.
    let chrome = ChromeConfig::resolve(&settings_path);

    // File logging when the settings told us where logs go, stderr otherwise.
    let level = chrome.log_level.unwrap_or(LogLevel::Info);
    let _log_guard = match chrome.logs_dir.as_deref() {
        Some(logs_dir) => Some(logging::init_tracing_with_file(level, logs_dir)),
        None => {
            logging::init_tracing(level);
            None
        }
    };

    tracing::info!("{} starting", chrome.title);
    tracing::info!("Settings: {}", settings_path.display());
    tracing::info!("Core version: {}", omw_core::version());

    let options = chrome.native_options();
    let title = chrome.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(WorkbenchApp::new(cc, settings_path)))),
    )
}
