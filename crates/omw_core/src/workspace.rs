//! Per-user workspace directory management.
//!
//! A workspace is a directory tree under the configured workspaces root:
//!
//! ```text
//! <workspaces-root>/<id>/
//!     uploads/    input files added by the user
//!     results/    outputs written by workflow runs
//!     logs/       per-run log files
//! ```
//!
//! Resolving a workspace creates the tree if needed and is idempotent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Workspace id used for a local, single-user deployment.
pub const DEFAULT_WORKSPACE_ID: &str = "default";

const UPLOADS_DIR: &str = "uploads";
const RESULTS_DIR: &str = "results";
const LOGS_DIR: &str = "logs";

/// Errors that can occur while resolving or inspecting a workspace.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The id contained no usable characters after sanitization.
    #[error("Invalid workspace id: '{0}'")]
    InvalidId(String),

    #[error("I/O error in workspace: {0}")]
    Io(#[from] io::Error),
}

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Handle to a resolved workspace directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Resolve (create if needed) the workspace for `id` under `base`.
    ///
    /// The id is sanitized to `[A-Za-z0-9_-]`; anything else becomes `_` so
    /// that a hostile id cannot escape the workspaces root.
    pub fn resolve(base: &Path, id: &str) -> WorkspaceResult<Self> {
        let clean = sanitize_id(id);
        if clean.is_empty() {
            return Err(WorkspaceError::InvalidId(id.to_string()));
        }

        let root = base.join(clean);
        for sub in [UPLOADS_DIR, RESULTS_DIR, LOGS_DIR] {
            fs::create_dir_all(root.join(sub))?;
        }

        tracing::debug!("Workspace resolved at {}", root.display());
        Ok(Self { root })
    }

    /// Workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding user-provided input files.
    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join(UPLOADS_DIR)
    }

    /// Directory holding workflow outputs.
    pub fn results_dir(&self) -> PathBuf {
        self.root.join(RESULTS_DIR)
    }

    /// Directory holding per-run log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Copy a file into the uploads directory, returning the new path.
    pub fn add_upload(&self, source: &Path) -> WorkspaceResult<PathBuf> {
        let name = source
            .file_name()
            .ok_or_else(|| WorkspaceError::InvalidId(source.display().to_string()))?;
        let target = self.uploads_dir().join(name);
        fs::copy(source, &target)?;
        tracing::info!("Uploaded {} to workspace", target.display());
        Ok(target)
    }

    /// Files currently in the uploads directory, sorted by name.
    pub fn uploaded_files(&self) -> WorkspaceResult<Vec<PathBuf>> {
        list_files(&self.uploads_dir())
    }

    /// Files currently in the results directory, sorted by name.
    pub fn result_files(&self) -> WorkspaceResult<Vec<PathBuf>> {
        list_files(&self.results_dir())
    }

    /// Remove a previously uploaded file.
    pub fn remove_upload(&self, path: &Path) -> WorkspaceResult<()> {
        fs::remove_file(path)?;
        Ok(())
    }
}

fn list_files(dir: &Path) -> WorkspaceResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn sanitize_id(id: &str) -> String {
    let clean: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    clean.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn resolve_creates_tree() {
        let dir = tempdir().unwrap();
        let ws = Workspace::resolve(dir.path(), "default").unwrap();

        assert!(ws.uploads_dir().is_dir());
        assert!(ws.results_dir().is_dir());
        assert!(ws.logs_dir().is_dir());
    }

    #[test]
    fn resolve_is_idempotent() {
        let dir = tempdir().unwrap();
        let first = Workspace::resolve(dir.path(), "default").unwrap();
        let second = Workspace::resolve(dir.path(), "default").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hostile_id_stays_under_root() {
        let dir = tempdir().unwrap();
        let ws = Workspace::resolve(dir.path(), "../escape").unwrap();
        assert!(ws.root().starts_with(dir.path()));
    }

    #[test]
    fn unusable_id_is_rejected() {
        let dir = tempdir().unwrap();
        let result = Workspace::resolve(dir.path(), "///");
        assert!(matches!(result, Err(WorkspaceError::InvalidId(_))));
    }

    #[test]
    fn uploads_round_trip() {
        let dir = tempdir().unwrap();
        let ws = Workspace::resolve(dir.path(), "default").unwrap();

        let source = dir.path().join("peaks.tsv");
        fs::write(&source, "100.0\t200.0\n").unwrap();

        let stored = ws.add_upload(&source).unwrap();
        assert_eq!(ws.uploaded_files().unwrap(), vec![stored.clone()]);

        ws.remove_upload(&stored).unwrap();
        assert!(ws.uploaded_files().unwrap().is_empty());
    }
}
