//! Key-value store capability.
//!
//! The publish engine only needs `get`/`set`/`incr` on string-valued keys,
//! so the backend is an injected trait object rather than a process-wide
//! connection: production code uses [`RedisStore`], tests use
//! [`MemoryStore`].

use std::collections::HashMap;

use redis::Commands;

use crate::error::SyncError;

/// Minimal string key-value capability required by the publish engine.
///
/// No transactions and no multi-key atomicity — the engine relies only on
/// per-key write ordering (see [`crate::publish::publish`]).
pub trait KeyValueStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, SyncError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SyncError>;
    /// Increment the integer at `key` by one, treating an absent key as 0,
    /// and return the new value.
    fn incr(&mut self, key: &str) -> Result<i64, SyncError>;
}

// ---------------------------------------------------------------------------
// Redis backend
// ---------------------------------------------------------------------------

/// Redis-backed store over a single synchronous connection.
pub struct RedisStore {
    conn: redis::Connection,
}

impl RedisStore {
    /// Connect to `url` (e.g. `redis://127.0.0.1/`).
    ///
    /// Fails with [`SyncError::Store`] if the server is unreachable.
    pub fn connect(url: &str) -> Result<Self, SyncError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection()?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for RedisStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, SyncError> {
        Ok(self.conn.get(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SyncError> {
        let _: () = self.conn.set(key, value)?;
        Ok(())
    }

    fn incr(&mut self, key: &str) -> Result<i64, SyncError> {
        Ok(self.conn.incr(key, 1)?)
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// In-memory store for tests. Never fails.
///
/// Counts every mutation so tests can assert that dry runs and no-ops
/// perform zero writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
    /// Number of `set`/`incr` calls performed.
    pub writes: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently present.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, SyncError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SyncError> {
        self.writes += 1;
        self.map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn incr(&mut self, key: &str) -> Result<i64, SyncError> {
        // Match redis INCR: absent key counts from 0, but a present
        // non-integer value is a type error, not a silent reset.
        let current = match self.map.get(key) {
            None => 0,
            Some(value) => value.parse::<i64>().map_err(|_| {
                SyncError::Store(redis::RedisError::from((
                    redis::ErrorKind::TypeError,
                    "value is not an integer or out of range",
                )))
            })?,
        };
        let next = current + 1;
        self.writes += 1;
        self.map.insert(key.to_owned(), next.to_string());
        Ok(next)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
