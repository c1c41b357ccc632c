//! CLI module for tourcal
//!
//! Provides command-line interface for:
//! - serve: Boot the HTTP server
//! - check: Validate the tours directory and report per-file issues
//! - show: Print a single tour as JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
