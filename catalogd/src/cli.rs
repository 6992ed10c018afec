//! Command-line interface definition and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the catalog server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maintenance command to run instead of serving.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Maintenance commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete every product row and exit.
    Clear,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
