//! Keycast — publish repository files into a versioned key-value store.
//!
//! # Usage
//!
//! ```text
//! keycast init [--manifest <path>]
//! keycast sync [--manifest <path>] [--dry-run] [--no-pull] [--branch <name>]
//! keycast dump [--manifest <path>] [KEYS...]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{dump::DumpArgs, init::InitArgs, sync::SyncArgs};

#[derive(Parser, Debug)]
#[command(
    name = "keycast",
    version,
    about = "Publish git-tracked config files into a versioned key-value store",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter manifest.
    Init(InitArgs),

    /// Refresh the working tree and publish every manifest artifact.
    Sync(SyncArgs),

    /// Print the stored content, version and digest for base keys.
    Dump(DumpArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::Dump(args) => args.run(),
    }
}
