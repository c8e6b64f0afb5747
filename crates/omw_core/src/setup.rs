//! Session setup: settings, workspace, and the verification gate.
//!
//! `run_setup` is the single entry point the shell calls before building
//! navigation. It loads settings authoritatively into the session context,
//! resolves the workspace directory tree, and decides whether the
//! verification gate stands in the way. The outcome is an explicit value;
//! the caller branches on it instead of being interrupted.

use std::path::Path;

use thiserror::Error;

use crate::config::{ConfigError, SettingsManager};
use crate::gate::{self, Challenge};
use crate::session::SessionContext;
use crate::workspace::{Workspace, WorkspaceError, DEFAULT_WORKSPACE_ID};

/// Result of a setup pass.
#[derive(Debug)]
pub enum SetupOutcome {
    /// Settings and workspace are in the session; proceed to navigation.
    Ready,
    /// The verification gate must be passed first. No navigation may be
    /// built; the shell shows the challenge and re-runs setup afterwards.
    Pending(Challenge),
}

/// Errors from the setup routine.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Load settings into the session, resolve the workspace, and evaluate the
/// verification gate.
///
/// Creates the settings resource with defaults when it is missing. On error
/// the session is left with whatever was populated before the failure; the
/// caller decides whether that is fatal.
pub fn run_setup(ctx: &mut SessionContext, settings_path: &Path) -> Result<SetupOutcome, SetupError> {
    let mut manager = SettingsManager::new(settings_path);
    manager.load_or_create()?;
    manager.ensure_dirs_exist()?;

    let settings = manager.settings().clone();
    tracing::info!(
        "Session setup: app '{}', workspaces under '{}'",
        settings.app_name,
        settings.paths.workspaces_root
    );

    let workspace = Workspace::resolve(
        Path::new(&settings.paths.workspaces_root),
        DEFAULT_WORKSPACE_ID,
    )?;

    ctx.settings = Some(settings.clone());
    ctx.workspace = Some(workspace);

    if gate::verification_required(&settings, ctx) {
        tracing::info!("Verification gate pending for this session");
        return Ok(SetupOutcome::Pending(Challenge::generate()));
    }

    Ok(SetupOutcome::Ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_APP_NAME;
    use crate::logging;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn setup_creates_settings_and_workspace() {
        logging::init_test_tracing();
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");

        // Keep workspace/log folders inside the temp dir
        let ws_root = dir.path().join("workspaces");
        let logs = dir.path().join("logs");
        fs::write(
            &settings_path,
            format!(
                r#"{{ "app-name": "MyApp", "paths": {{ "workspaces-root": "{}", "logs-folder": "{}" }} }}"#,
                ws_root.display(),
                logs.display()
            ),
        )
        .unwrap();

        let mut ctx = SessionContext::new();
        let outcome = run_setup(&mut ctx, &settings_path).unwrap();

        assert!(matches!(outcome, SetupOutcome::Ready));
        assert_eq!(ctx.settings().unwrap().app_name, "MyApp");
        let ws = ctx.workspace().unwrap();
        assert!(ws.uploads_dir().is_dir());
        assert!(ws.root().starts_with(&ws_root));
    }

    #[test]
    fn missing_settings_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let settings_path = dir.path().join("settings.json");

        let mut ctx = SessionContext::new();
        let outcome = run_setup(&mut ctx, &settings_path).unwrap();

        assert!(matches!(outcome, SetupOutcome::Ready));
        assert!(settings_path.exists());
        assert_eq!(ctx.settings().unwrap().app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn online_deployment_yields_pending_until_verified() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        let ws_root = dir.path().join("workspaces");
        let logs = dir.path().join("logs");
        fs::write(
            &settings_path,
            format!(
                r#"{{ "deployment": {{ "online-deployment": true }}, "paths": {{ "workspaces-root": "{}", "logs-folder": "{}" }} }}"#,
                ws_root.display(),
                logs.display()
            ),
        )
        .unwrap();

        let mut ctx = SessionContext::new();
        let outcome = run_setup(&mut ctx, &settings_path).unwrap();
        let challenge = match outcome {
            SetupOutcome::Pending(challenge) => challenge,
            SetupOutcome::Ready => panic!("expected pending verification"),
        };

        // Settings are in the session even while the gate is pending
        assert!(ctx.settings().is_ok());

        // Passing the gate makes the next pass ready
        let answer: u32 = challenge
            .prompt()
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u32>().unwrap())
            .sum();
        assert!(challenge.verify(&answer.to_string(), &mut ctx));

        let second = run_setup(&mut ctx, &settings_path).unwrap();
        assert!(matches!(second, SetupOutcome::Ready));
    }

    #[test]
    fn malformed_settings_is_an_error() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        fs::write(&settings_path, "{ broken").unwrap();

        let mut ctx = SessionContext::new();
        let result = run_setup(&mut ctx, &settings_path);

        assert!(matches!(result, Err(SetupError::Config(_))));
        // Nothing was loaded into the session
        assert!(ctx.settings().is_err());
    }
}
