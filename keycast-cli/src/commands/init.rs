//! `keycast init` — scaffold a starter manifest.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use keycast_core::{manifest, Manifest};

/// Arguments for `keycast init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the manifest.
    #[arg(long, default_value = "keycast.yaml")]
    pub manifest: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        if self.manifest.exists() {
            bail!("{} already exists", self.manifest.display());
        }
        manifest::save(&self.manifest, &Manifest::starter())
            .with_context(|| format!("cannot write {}", self.manifest.display()))?;
        println!("✓ wrote {}", self.manifest.display());
        println!("Edit the artifacts list, then run `keycast sync`.");
        Ok(())
    }
}
