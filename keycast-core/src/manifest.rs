//! YAML manifest persistence.
//!
//! The manifest lives in the repository itself (conventionally
//! `keycast.yaml` at the repo root) and declares which logical keys are
//! published from which glob patterns, plus the repo root, branch and
//! store URL the sync run uses.
//!
//! Saves are atomic: serialize → `.yaml.tmp` sibling → rename.

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::types::Manifest;

/// Load the manifest at `path`.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed YAML.
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Atomically save `manifest` to `path`.
///
/// Write flow: serialize → `<path>.tmp` sibling → `rename`.
/// The `.tmp` is always in the same directory as the target (same
/// filesystem — no EXDEV).
pub fn save(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let tmp = tmp_path(path);
    let yaml = serde_yaml::to_string(manifest)?;
    std::fs::write(&tmp, yaml)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
