//! CLI for the romsort ROM collection organizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use romsort_core::config;

use commands::{run_lookup, run_pipeline, run_sanitize, run_scan};

/// Top-level CLI for the romsort organizer.
#[derive(Debug, Parser)]
#[command(name = "romsort")]
#[command(about = "romsort: rename and sort ROM archives by scraped metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Process every archive under the source root: resolve metadata,
    /// rename, move into its console folder, clean up emptied directories.
    Run,

    /// List the candidate archives under the source root without touching anything.
    Scan,

    /// Resolve and print metadata for a single identifier.
    Lookup {
        /// Identifier (an archive's base filename).
        id: String,
    },

    /// Print the filesystem-safe form of a name.
    Sanitize {
        /// Name to sanitize, e.g. a game title.
        name: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run => run_pipeline(&cfg)?,
            CliCommand::Scan => run_scan(&cfg)?,
            CliCommand::Lookup { id } => run_lookup(&cfg, &id)?,
            CliCommand::Sanitize { name } => run_sanitize(&name),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
