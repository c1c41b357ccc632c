//! CLI argument definitions using clap
//!
//! Commands:
//! - tourcal serve [--config <path>] [--tours-dir <path>] [--host <h>] [--port <p>]
//! - tourcal check [--tours-dir <path>]
//! - tourcal show --name <name> [--tours-dir <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tourcal - Read-only HTTP API serving tour schedules to a calendar widget
#[derive(Parser, Debug)]
#[command(name = "tourcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file (otherwise environment + defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory containing tour JSON files
        #[arg(long)]
        tours_dir: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate every tour file and report per-file issues
    Check {
        /// Directory containing tour JSON files
        #[arg(long, default_value = "tours")]
        tours_dir: PathBuf,
    },

    /// Print a single tour as JSON
    Show {
        /// Tour name to look up (exact match)
        #[arg(long)]
        name: String,

        /// Directory containing tour JSON files
        #[arg(long, default_value = "tours")]
        tours_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
