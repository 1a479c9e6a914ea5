//! Shared batch entrypoint used by the CLI.

use std::path::Path;

use keycast_core::{Artifact, LogicalKey};

use crate::error::SyncError;
use crate::publish::{update, Outcome};
use crate::store::KeyValueStore;

/// Per-key result of a batch run.
#[derive(Debug)]
pub struct KeyReport {
    pub key: LogicalKey,
    pub result: Result<Outcome, SyncError>,
}

/// Process every artifact against the store.
///
/// Errors are isolated per key: a failing aggregation or publish is
/// recorded in that key's report and the batch continues. The caller
/// decides how to surface failures.
pub fn run(
    store: &mut dyn KeyValueStore,
    repo_dir: &Path,
    artifacts: &[Artifact],
    dry_run: bool,
) -> Vec<KeyReport> {
    artifacts
        .iter()
        .map(|artifact| KeyReport {
            key: artifact.key.clone(),
            result: update(store, repo_dir, &artifact.key, &artifact.pattern, dry_run),
        })
        .collect()
}
