//! `keycast sync` — refresh the working tree and publish every artifact.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use keycast_core::manifest;
use keycast_sync::{pipeline, publish::Outcome, repo, KeyReport, RedisStore};

/// Arguments for `keycast sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the keycast manifest.
    #[arg(long, default_value = "keycast.yaml")]
    pub manifest: PathBuf,

    /// Report what would be published without writing to the store.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the working-tree refresh (checkout + pull) before publishing.
    #[arg(long)]
    pub no_pull: bool,

    /// Branch to check out before pulling (defaults to the manifest's).
    #[arg(long)]
    pub branch: Option<String>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let manifest = manifest::load(&self.manifest)
            .with_context(|| format!("cannot load manifest {}", self.manifest.display()))?;
        let repo_dir = super::resolve_repo_dir(&self.manifest, &manifest);

        // Refresh is all-or-nothing: any failure aborts before any publish.
        if !self.no_pull {
            let branch = self.branch.as_deref().unwrap_or(&manifest.branch);
            repo::refresh(&repo_dir, branch)
                .with_context(|| format!("refresh of {} failed", repo_dir.display()))?;
        }

        let mut store = RedisStore::connect(&manifest.redis_url)
            .with_context(|| format!("cannot connect to {}", manifest.redis_url))?;
        let reports = pipeline::run(&mut store, &repo_dir, &manifest.artifacts, self.dry_run);
        print_reports(&reports, self.dry_run);

        let failed = reports.iter().filter(|r| r.result.is_err()).count();
        if failed > 0 {
            bail!("{failed} of {} keys failed", reports.len());
        }
        Ok(())
    }
}

fn print_reports(reports: &[KeyReport], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if reports.is_empty() {
        println!("{prefix}✓ no artifacts in manifest");
        return;
    }

    let updated = reports
        .iter()
        .filter(|r| {
            matches!(
                r.result,
                Ok(Outcome::Updated { .. }) | Ok(Outcome::WouldUpdate)
            )
        })
        .count();
    let unchanged = reports
        .iter()
        .filter(|r| matches!(r.result, Ok(Outcome::Unchanged)))
        .count();
    println!(
        "{prefix}✓ {} keys ({updated} updated, {unchanged} unchanged)",
        reports.len()
    );

    for report in reports {
        match &report.result {
            Ok(Outcome::Updated { version, digest }) => {
                println!("  ✎  {} → v{version} ({})", report.key, short(digest));
            }
            Ok(Outcome::WouldUpdate) => println!("  ~  {} (update pending)", report.key),
            Ok(Outcome::Unchanged) => println!("  ·  {}", report.key),
            Ok(Outcome::Absent) => println!("  ?  {} (no files matched)", report.key),
            Err(e) => println!("  ✗  {}: {e}", report.key),
        }
    }
}

/// First 12 hex chars — enough to eyeball a digest in a report line.
fn short(digest: &str) -> &str {
    &digest[..digest.len().min(12)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_digest_truncates_long_and_keeps_short() {
        assert_eq!(short("0123456789abcdef"), "0123456789ab");
        assert_eq!(short("abc"), "abc");
    }
}
