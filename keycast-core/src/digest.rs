//! Key derivation and content fingerprinting.
//!
//! Every logical key maps to exactly three store keys: the content key (the
//! logical key itself), a version counter key and a digest key. The digest
//! is a change detector, not an integrity guarantee: the only requirement
//! is that equal payloads always hash equal.

use sha2::{Digest, Sha256};

use crate::types::LogicalKey;

/// Suffix appended to the base key for the version counter.
const VERSION_SUFFIX: &str = "version";

/// Suffix appended to the base key for the content digest.
const DIGEST_SUFFIX: &str = "sha256";

/// The three store keys derived from one logical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    /// Holds the published payload. Equal to the logical key itself.
    pub content: String,
    /// Holds the monotonically increasing publish counter.
    pub version: String,
    /// Holds the hex digest of the value under `content`.
    pub digest: String,
}

impl KeySet {
    /// Derive the key set for `base`. Pure string work, no I/O.
    pub fn derive(base: &LogicalKey) -> Self {
        Self {
            content: base.0.clone(),
            version: format!("{}:{VERSION_SUFFIX}", base.0),
            digest: format!("{}:{DIGEST_SUFFIX}", base.0),
        }
    }
}

/// SHA-256 hex digest of `payload`.
pub fn content_digest(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
