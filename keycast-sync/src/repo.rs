//! Working-tree refresh (boundary component).
//!
//! Before a sync run the caller may bring the repository up to date:
//! dirty-tree guard first, then `git checkout <branch>`, then `git pull`.
//! Any failure aborts the refresh; the caller must not publish against a
//! tree the refresh left in an unknown state.
//!
//! Subprocess output is inherited so checkout/pull progress streams to the
//! terminal as it happens.

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::error::{io_err, SyncError};

/// Refresh the working tree at `repo_dir` onto `branch`.
///
/// Fails with [`SyncError::DirtyWorkingTree`] before running checkout or
/// pull when the tree has uncommitted modifications, and with
/// [`SyncError::RefreshFailed`] when either subprocess exits nonzero.
pub fn refresh(repo_dir: &Path, branch: &str) -> Result<(), SyncError> {
    if is_dirty(repo_dir)? {
        return Err(SyncError::DirtyWorkingTree);
    }
    info!("refreshing {} onto {branch}", repo_dir.display());
    run_git(repo_dir, "checkout", &["checkout", branch])?;
    run_git(repo_dir, "pull", &["pull"])?;
    Ok(())
}

/// Whether the working tree has uncommitted modifications.
///
/// `git diff --quiet HEAD` exits nonzero when the tree differs from HEAD.
pub fn is_dirty(repo_dir: &Path) -> Result<bool, SyncError> {
    let status = git_status(repo_dir, &["diff", "--quiet", "HEAD"])?;
    Ok(!status.success())
}

fn run_git(repo_dir: &Path, op: &'static str, args: &[&str]) -> Result<(), SyncError> {
    let status = git_status(repo_dir, args)?;
    if !status.success() {
        return Err(SyncError::RefreshFailed { op, status });
    }
    Ok(())
}

/// Run `git <args>` in `repo_dir` with inherited stdio and return the exit
/// status. A spawn failure (git missing from PATH) surfaces as an I/O
/// error annotated with the repo path.
fn git_status(repo_dir: &Path, args: &[&str]) -> Result<ExitStatus, SyncError> {
    Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .status()
        .map_err(|e| io_err(repo_dir, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
