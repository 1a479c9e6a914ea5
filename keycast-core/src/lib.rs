//! Keycast core library — domain types, content digests, manifest persistence.
//!
//! Public API surface:
//! - [`types`] — newtypes and manifest structs
//! - [`digest`] — [`KeySet`] derivation and content fingerprinting
//! - [`manifest`] — load / save / scaffold
//! - [`error`] — [`ManifestError`]

pub mod digest;
pub mod error;
pub mod manifest;
pub mod types;

pub use digest::{content_digest, KeySet};
pub use error::ManifestError;
pub use types::{Artifact, LogicalKey, Manifest};
