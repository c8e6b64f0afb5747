//! OMW Core - Backend logic for OpenMS Workbench
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be used by the GUI application or a CLI tool.

pub mod config;
pub mod gate;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod session;
pub mod setup;
pub mod spectra;
pub mod tools;
pub mod workspace;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
