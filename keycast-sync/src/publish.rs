//! Change detection and versioned publish.
//!
//! ## `publish` — ordered write protocol
//!
//! 1. SHA-256 hash the payload.
//! 2. Compare with the store's digest for the key → no-op if identical.
//! 3. `--dry-run`: report a pending update, write nothing.
//! 4. Write content, then digest, then increment the version counter.
//!
//! The write order in step 4 is the engine's only concurrency contract:
//! a reader that observes a bumped version can rely on the content and
//! digest already being current. The sequence is not atomic against the
//! store and there is no optimistic check between the digest read and the
//! writes; concurrent runs on one key are last-writer-wins.

use std::path::Path;

use tracing::{debug, info};

use keycast_core::{content_digest, KeySet, LogicalKey};

use crate::aggregate::{aggregate, Aggregate};
use crate::error::SyncError;
use crate::store::KeyValueStore;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Outcome of publishing one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publish {
    /// Store digest matches the payload; nothing written.
    Unchanged,
    /// `--dry-run` mode: an update is pending but nothing was written.
    WouldUpdate,
    /// Content, digest and version were all written.
    Updated { version: i64, digest: String },
}

/// Outcome of updating one (key, pattern) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pattern matched no files; the store was not touched.
    Absent,
    Unchanged,
    WouldUpdate,
    Updated { version: i64, digest: String },
}

impl From<Publish> for Outcome {
    fn from(p: Publish) -> Self {
        match p {
            Publish::Unchanged => Outcome::Unchanged,
            Publish::WouldUpdate => Outcome::WouldUpdate,
            Publish::Updated { version, digest } => Outcome::Updated { version, digest },
        }
    }
}

// ---------------------------------------------------------------------------
// publish
// ---------------------------------------------------------------------------

/// Publish `payload` under `base_key` if the store's copy is stale.
pub fn publish(
    store: &mut dyn KeyValueStore,
    base_key: &LogicalKey,
    payload: &str,
    dry_run: bool,
) -> Result<Publish, SyncError> {
    let digest = content_digest(payload);
    let keys = KeySet::derive(base_key);

    if store.get(&keys.digest)?.as_deref() == Some(digest.as_str()) {
        debug!("unchanged: {base_key}");
        return Ok(Publish::Unchanged);
    }

    if dry_run {
        info!("[dry-run] would publish: {base_key}");
        return Ok(Publish::WouldUpdate);
    }

    // Content before digest before version — see module docs.
    store.set(&keys.content, payload)?;
    store.set(&keys.digest, &digest)?;
    let version = store.incr(&keys.version)?;

    info!("published: {base_key} v{version}");
    Ok(Publish::Updated { version, digest })
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

/// Aggregate `pattern` under `repo_dir` and publish it under `base_key`.
///
/// A pattern matching no files reports [`Outcome::Absent`] without any
/// store round-trip.
pub fn update(
    store: &mut dyn KeyValueStore,
    repo_dir: &Path,
    base_key: &LogicalKey,
    pattern: &str,
    dry_run: bool,
) -> Result<Outcome, SyncError> {
    match aggregate(repo_dir, pattern)? {
        Aggregate::Absent => {
            debug!("no files for {base_key} ({pattern:?})");
            Ok(Outcome::Absent)
        }
        Aggregate::Single(payload) | Aggregate::Merged(payload) => {
            Ok(publish(store, base_key, &payload, dry_run)?.into())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::store::MemoryStore;

    use super::*;

    fn key() -> LogicalKey {
        LogicalKey::from("svc:config:yaml")
    }

    #[test]
    fn first_publish_writes_all_three_keys_at_version_one() {
        let mut store = MemoryStore::new();
        let result = publish(&mut store, &key(), "x: 1\n", false).unwrap();

        let digest = content_digest("x: 1\n");
        assert_eq!(
            result,
            Publish::Updated {
                version: 1,
                digest: digest.clone()
            }
        );
        assert_eq!(
            store.get("svc:config:yaml").unwrap().as_deref(),
            Some("x: 1\n")
        );
        assert_eq!(
            store.get("svc:config:yaml:sha256").unwrap(),
            Some(digest)
        );
        assert_eq!(
            store.get("svc:config:yaml:version").unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn same_payload_is_unchanged_and_writes_nothing() {
        let mut store = MemoryStore::new();
        publish(&mut store, &key(), "x: 1\n", false).unwrap();
        let writes_before = store.writes;

        let result = publish(&mut store, &key(), "x: 1\n", false).unwrap();
        assert_eq!(result, Publish::Unchanged);
        assert_eq!(store.writes, writes_before, "no-op must not write");
    }

    #[test]
    fn changed_payload_bumps_version_by_exactly_one() {
        let mut store = MemoryStore::new();
        publish(&mut store, &key(), "v1", false).unwrap();
        let result = publish(&mut store, &key(), "v2", false).unwrap();
        assert!(matches!(result, Publish::Updated { version: 2, .. }));
        let result = publish(&mut store, &key(), "v3", false).unwrap();
        assert!(matches!(result, Publish::Updated { version: 3, .. }));
    }

    #[test]
    fn dry_run_reports_pending_update_without_writing() {
        let mut store = MemoryStore::new();
        let result = publish(&mut store, &key(), "x: 1\n", true).unwrap();
        assert_eq!(result, Publish::WouldUpdate);
        assert!(store.is_empty(), "dry run must not touch the store");
    }

    #[test]
    fn dry_run_on_unchanged_content_still_reports_unchanged() {
        let mut store = MemoryStore::new();
        publish(&mut store, &key(), "x: 1\n", false).unwrap();
        let result = publish(&mut store, &key(), "x: 1\n", true).unwrap();
        assert_eq!(result, Publish::Unchanged);
    }

    #[test]
    fn empty_payload_is_a_valid_published_state() {
        let mut store = MemoryStore::new();
        let result = publish(&mut store, &key(), "", false).unwrap();
        assert!(matches!(result, Publish::Updated { version: 1, .. }));
        assert_eq!(store.get("svc:config:yaml").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn update_absent_pattern_reports_absent_and_skips_the_store() {
        let dir = TempDir::new().unwrap();
        let mut store = MemoryStore::new();
        let outcome = update(&mut store, dir.path(), &key(), "nope/*.yaml", false).unwrap();
        assert_eq!(outcome, Outcome::Absent);
        assert!(store.is_empty());
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn update_publishes_single_file_verbatim() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.yaml"), "foo\nbar\n").unwrap();
        let mut store = MemoryStore::new();

        let outcome = update(&mut store, dir.path(), &key(), "*.yaml", false).unwrap();
        assert!(matches!(outcome, Outcome::Updated { version: 1, .. }));
        assert_eq!(
            store.get("svc:config:yaml").unwrap().as_deref(),
            Some("foo\nbar\n")
        );
    }

    #[test]
    fn update_twice_without_changes_is_idempotent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.yaml"), "x: 1\n").unwrap();
        let mut store = MemoryStore::new();

        let first = update(&mut store, dir.path(), &key(), "*.yaml", false).unwrap();
        assert!(matches!(first, Outcome::Updated { version: 1, .. }));
        let writes_after_first = store.writes;

        let second = update(&mut store, dir.path(), &key(), "*.yaml", false).unwrap();
        assert_eq!(second, Outcome::Unchanged);
        assert_eq!(store.writes, writes_after_first);
        assert_eq!(
            store.get("svc:config:yaml:version").unwrap().as_deref(),
            Some("1")
        );
    }
}
