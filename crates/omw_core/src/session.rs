//! Session context shared between the setup routine and the UI shell.
//!
//! The context is an explicit object passed by reference; the setup routine
//! populates it and the shell reads from it. Nothing else mutates it.

use thiserror::Error;

use crate::config::Settings;
use crate::workspace::Workspace;

/// Errors surfaced when reading the session context.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Settings were never loaded into the session. Fatal for the current
    /// pass: without them the navigation label cannot be trusted.
    #[error("Application settings were not loaded into the session")]
    SettingsNotReady,
}

/// Per-user session state.
///
/// Owned by the application shell; populated only by
/// [`setup::run_setup`](crate::setup::run_setup).
#[derive(Debug, Default)]
pub struct SessionContext {
    pub(crate) settings: Option<Settings>,
    pub(crate) workspace: Option<Workspace>,
    pub(crate) verified: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded settings, or `SettingsNotReady` when setup has not
    /// completed (or failed before loading them).
    pub fn settings(&self) -> Result<&Settings, SessionError> {
        self.settings.as_ref().ok_or(SessionError::SettingsNotReady)
    }

    /// The resolved workspace, if setup got that far.
    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// Whether the human-verification gate has been passed this session.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub(crate) fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_reports_settings_not_ready() {
        let ctx = SessionContext::new();
        assert_eq!(ctx.settings().unwrap_err(), SessionError::SettingsNotReady);
        assert!(ctx.workspace().is_none());
        assert!(!ctx.is_verified());
    }

    #[test]
    fn mark_verified_is_sticky() {
        let mut ctx = SessionContext::new();
        ctx.mark_verified();
        assert!(ctx.is_verified());
    }
}
