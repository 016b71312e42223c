//! Repository Operations
//!
//! Detection of the enclosing git repository and resolution of its working
//! tree root. The git-touching workflows are guarded by these before any
//! prompt is shown.

use std::{path::PathBuf, process::Command};

use crate::errors::{GitError, GitkitError, Result};

/// Finds the `.git` directory of the current repository.
///
/// Uses `git rev-parse --git-dir`, so it works from any subdirectory of the
/// working tree.
///
/// # Errors
///
/// Returns `GitkitError::Git(GitError::RepositoryNotFound)` when not inside
/// a git repository, or when the git command itself cannot run.
pub fn find_git_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()?;

    if output.status.success() {
        let git_root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

        if git_root.exists() {
            Ok(git_root)
        } else {
            Err(GitkitError::Git(GitError::RepositoryNotFound))
        }
    } else {
        Err(GitkitError::Git(GitError::RepositoryNotFound))
    }
}

/// Retrieves the top-level path of the git working tree.
///
/// The workflows change into this directory before acting so commands like
/// `git add .` cover the whole repository regardless of where the tool was
/// invoked.
///
/// # Errors
///
/// Returns an error if not in a git repository or the command fails.
pub fn get_top_level_path() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);

        Ok(PathBuf::from(stdout.trim()))
    } else {
        Err(GitkitError::Git(GitError::CommandFailed {
            command: "git rev-parse --show-toplevel".to_string(),
            output: String::from_utf8_lossy(&output.stderr).to_string(),
        }))
    }
}
