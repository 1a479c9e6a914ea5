//! Error types for keycast-sync.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use keycast_core::ManifestError;

/// All errors that can arise from aggregation, publishing and refresh.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The working tree has uncommitted modifications; refresh refuses to
    /// run rather than pull over local edits.
    #[error("working tree has uncommitted changes; commit or stash them first")]
    DirtyWorkingTree,

    /// `git checkout` or `git pull` exited nonzero (or could not report a
    /// status at all).
    #[error("git {op} failed with {status}")]
    RefreshFailed { op: &'static str, status: ExitStatus },

    /// An I/O error, with annotated path for context. Covers unreadable
    /// matched files.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A multi-file glob match spans more than one file extension.
    #[error("refusing to merge files with mixed extensions: {extensions:?}")]
    InconsistentFileTypes { extensions: Vec<String> },

    /// The artifact's glob pattern is not valid.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The key-value backend is unreachable or errored.
    #[error("store unavailable: {0}")]
    Store(#[from] redis::RedisError),

    /// An error from manifest loading.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
