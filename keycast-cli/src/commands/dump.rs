//! `keycast dump` — print stored values for base keys. Read-only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use keycast_core::{manifest, KeySet, LogicalKey};
use keycast_sync::{KeyValueStore, RedisStore};

/// Arguments for `keycast dump`.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Path to the keycast manifest.
    #[arg(long, default_value = "keycast.yaml")]
    pub manifest: PathBuf,

    /// Base keys to dump (defaults to every key in the manifest).
    pub keys: Vec<String>,
}

impl DumpArgs {
    pub fn run(self) -> Result<()> {
        let manifest = manifest::load(&self.manifest)
            .with_context(|| format!("cannot load manifest {}", self.manifest.display()))?;

        let keys: Vec<LogicalKey> = if self.keys.is_empty() {
            manifest.artifacts.iter().map(|a| a.key.clone()).collect()
        } else {
            self.keys.into_iter().map(LogicalKey::from).collect()
        };

        let mut store = RedisStore::connect(&manifest.redis_url)
            .with_context(|| format!("cannot connect to {}", manifest.redis_url))?;

        for base in &keys {
            let derived = KeySet::derive(base);
            for rkey in [&derived.content, &derived.version, &derived.digest] {
                if let Some(value) = store.get(rkey)? {
                    println!("{}", format_entry(rkey, &value));
                }
            }
        }
        Ok(())
    }
}

/// `[key] value`, with multi-line values starting on their own line and
/// every line indented one tab.
fn format_entry(rkey: &str, value: &str) -> String {
    if value.contains('\n') {
        let indented: Vec<String> = value.lines().map(|line| format!("\t{line}")).collect();
        format!("[{rkey}]\n{}", indented.join("\n"))
    } else {
        format!("[{rkey}] {value}")
    }
}
