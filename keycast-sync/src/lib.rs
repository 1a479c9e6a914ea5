//! # keycast-sync
//!
//! Digest-gated versioned publishing of repository files into a key-value
//! store.
//!
//! Call [`update`] to aggregate one glob pattern and publish it under a
//! logical key, or [`pipeline::run`] to process every artifact in a
//! manifest. [`repo::refresh`] guards and updates the working tree before
//! a run.

pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod repo;
pub mod store;

pub use aggregate::{aggregate, Aggregate};
pub use error::SyncError;
pub use pipeline::{run, KeyReport};
pub use publish::{publish, update, Outcome, Publish};
pub use store::{KeyValueStore, MemoryStore, RedisStore};
