//! Scenemap CLI - scene content manifest generator
//!
//! Usage: scenemap <COMMAND>
//!
//! Commands:
//!   build   Scan the base directory and write contents.json / contents.js
//!   check   Verify the manifest on disk matches the directory contents

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Scenemap - scene content manifest generator
#[derive(Parser, Debug)]
#[command(name = "scenemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit a machine-readable JSON event instead of human output
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the base directory and write both manifest artifacts
    Build {
        /// Base directory of the static build
        #[arg(short, long, default_value = "static")]
        base: PathBuf,

        /// Version tag recorded verbatim in the manifest
        #[arg(long, default_value = "dev")]
        tag: String,
    },

    /// Verify contents.json is up to date with the directory contents
    Check {
        /// Base directory of the static build
        #[arg(short, long, default_value = "static")]
        base: PathBuf,

        /// Version tag the manifest is expected to carry
        #[arg(long, default_value = "dev")]
        tag: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { base, tag } => {
            commands::build::cmd_build(&base, &tag, cli.json, cli.verbose)
        }
        Commands::Check { base, tag } => {
            commands::check::cmd_check(&base, &tag, cli.json, cli.verbose)
        }
    }
}
