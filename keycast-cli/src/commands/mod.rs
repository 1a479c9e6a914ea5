pub mod dump;
pub mod init;
pub mod sync;

use std::path::{Path, PathBuf};

use keycast_core::Manifest;

/// Repo root the patterns resolve against: the manifest's `repo_dir`,
/// resolved relative to the manifest file's own directory when relative.
pub(crate) fn resolve_repo_dir(manifest_path: &Path, manifest: &Manifest) -> PathBuf {
    if manifest.repo_dir.is_absolute() {
        manifest.repo_dir.clone()
    } else {
        manifest_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&manifest.repo_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_repo_dir_wins() {
        let mut manifest = Manifest::starter();
        manifest.repo_dir = PathBuf::from("/srv/repo");
        let dir = resolve_repo_dir(Path::new("/etc/keycast.yaml"), &manifest);
        assert_eq!(dir, PathBuf::from("/srv/repo"));
    }

    #[test]
    fn relative_repo_dir_resolves_against_manifest_parent() {
        let mut manifest = Manifest::starter();
        manifest.repo_dir = PathBuf::from("configs");
        let dir = resolve_repo_dir(Path::new("/srv/app/keycast.yaml"), &manifest);
        assert_eq!(dir, PathBuf::from("/srv/app/configs"));
    }
}
