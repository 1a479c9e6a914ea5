//! Domain types for the keycast manifest.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed logical key identifying one published artifact,
/// e.g. `service:config:yaml`. Opaque to the engine; the store keys for
/// content, version and digest are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalKey(pub String);

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LogicalKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LogicalKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Manifest structs
// ---------------------------------------------------------------------------

/// One published artifact: a logical key plus the glob that selects its
/// source files, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub key: LogicalKey,
    pub pattern: String,
}

/// Root of the keycast YAML manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    /// Repository root the patterns are resolved against. Relative paths
    /// are resolved against the manifest's own directory.
    #[serde(default = "default_repo_dir")]
    pub repo_dir: PathBuf,
    /// Branch the refresh step checks out before pulling.
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

fn default_repo_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_branch() -> String {
    "main".to_owned()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1/".to_owned()
}

impl Manifest {
    /// Starter manifest written by `keycast init`.
    pub fn starter() -> Self {
        Self {
            version: 1,
            repo_dir: default_repo_dir(),
            branch: default_branch(),
            redis_url: default_redis_url(),
            artifacts: vec![Artifact {
                key: LogicalKey::from("example:config:yaml"),
                pattern: "config/*.yaml".to_owned(),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
