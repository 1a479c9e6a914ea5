//! Glob resolution and the multi-file merge policy.
//!
//! One artifact pattern can match zero, one or many files. A single match
//! is passed through verbatim. Multiple matches are merged into one
//! payload:
//!
//! 1. All matches must share one file extension (case-insensitive;
//!    "no extension" counts as its own extension). Mixed extensions are
//!    refused with [`SyncError::InconsistentFileTypes`].
//! 2. `yaml`/`yml` files are joined with the YAML document separator
//!    `---`; every other extension joins with an empty separator.
//! 3. Empty files are skipped from the merge.
//! 4. If any file's content contains a carriage return, the separator
//!    gains a trailing `\r` so the merged document's line endings stay
//!    consistent.
//! 5. Contents are joined with `separator + "\n"` strictly *between*
//!    entries — never leading or trailing.
//!
//! Matches are sorted lexicographically before merging so the payload does
//! not depend on filesystem enumeration order.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{io_err, SyncError};

/// Result of resolving one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// The pattern matched no files.
    Absent,
    /// Exactly one file matched; payload is its raw content.
    Single(String),
    /// Two or more files matched; payload is the merged content.
    Merged(String),
}

/// Resolve `pattern` under `repo_dir` and produce the payload.
pub fn aggregate(repo_dir: &Path, pattern: &str) -> Result<Aggregate, SyncError> {
    let full_pattern = repo_dir.join(pattern);
    let mut matches = Vec::new();
    for entry in glob::glob(&full_pattern.to_string_lossy())? {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(io_err(path, std::io::Error::other(e)));
            }
        }
    }
    matches.sort();
    debug!("pattern {pattern:?} matched {} file(s)", matches.len());

    match matches.as_slice() {
        [] => Ok(Aggregate::Absent),
        [only] => Ok(Aggregate::Single(read_file(only)?)),
        many => Ok(Aggregate::Merged(merge(many)?)),
    }
}

fn read_file(path: &Path) -> Result<String, SyncError> {
    std::fs::read_to_string(path).map_err(|e| io_err(path, e))
}

/// Separator token for a (lowercased) file extension.
fn separator(extension: &str) -> &'static str {
    match extension {
        "yaml" | "yml" => "---",
        _ => "",
    }
}

/// Lowercased extension of `path`; empty string when there is none.
fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Merge two or more files into one payload per the policy above.
fn merge(paths: &[PathBuf]) -> Result<String, SyncError> {
    let mut extensions: Vec<String> = paths.iter().map(|p| extension(p)).collect();
    extensions.sort();
    extensions.dedup();
    if extensions.len() > 1 {
        return Err(SyncError::InconsistentFileTypes { extensions });
    }
    let sep = separator(&extensions[0]);

    let mut contents = Vec::with_capacity(paths.len());
    let mut carriage_returns = false;
    for path in paths {
        let text = read_file(path)?;
        if text.contains('\r') {
            carriage_returns = true;
        }
        if !text.is_empty() {
            contents.push(text);
        }
    }

    let joiner = if carriage_returns {
        format!("{sep}\r\n")
    } else {
        format!("{sep}\n")
    };
    Ok(contents.join(&joiner))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
