//! CLI command implementations
//!
//! `serve` boots the HTTP server; `check` and `show` are one-shot
//! maintenance commands over the tours directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{EventLog, JsonLogger};
use crate::store::TourStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            tours_dir,
            host,
            port,
        } => serve(config, tours_dir, host, port),
        Command::Check { tours_dir } => check(&tours_dir),
        Command::Show { name, tours_dir } => show(&name, &tours_dir),
    }
}

/// Load a configuration file.
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Start the HTTP server.
///
/// Config precedence: file (when `--config` is given) or environment,
/// then individual flags on top.
fn serve(
    config_path: Option<PathBuf>,
    tours_dir: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => HttpServerConfig::from_env(),
    };
    if let Some(dir) = tours_dir {
        config.tours_dir = dir;
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let log: Arc<dyn EventLog> = Arc::new(JsonLogger::new());
    log.info(
        "SERVER_STARTING",
        &[
            ("addr", &config.socket_addr()),
            ("tours_dir", &config.tours_dir.display().to_string()),
            ("allowed_origins", &config.cors_origins.join(",")),
        ],
    );

    let server = HttpServer::with_config(config, log);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Validate every tour file and print a per-file report.
fn check(tours_dir: &Path) -> CliResult<()> {
    if !tours_dir.exists() {
        return Err(CliError::check_failed(format!(
            "tours directory '{}' does not exist",
            tours_dir.display()
        )));
    }

    let log: Arc<dyn EventLog> = Arc::new(JsonLogger::new());
    let store = TourStore::new(tours_dir, log);

    let entries = fs::read_dir(tours_dir).map_err(|e| {
        CliError::io_error(format!("Failed to read '{}': {}", tours_dir.display(), e))
    })?;

    // Stable report order regardless of platform listing order
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut invalid = 0usize;

    for path in &paths {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match store.load_file(path) {
            Ok(tour) => {
                println!("ok      {} ({} shifts)", file_name, tour.dates.len());
                for (idx, shift) in tour.dates.iter().enumerate() {
                    for warning in shift_date_warnings(&shift.date) {
                        println!("        dates[{}]: {}", idx, warning);
                    }
                }
            }
            Err(err) => {
                invalid += 1;
                println!("invalid {}: {}", file_name, err);
            }
        }
    }

    println!("{} files checked, {} invalid", paths.len(), invalid);

    if invalid > 0 {
        return Err(CliError::check_failed(format!(
            "{} of {} tour files invalid",
            invalid,
            paths.len()
        )));
    }

    Ok(())
}

/// Diagnostics for a shift's date string.
///
/// The serving path treats dates as opaque beyond the `" to "` split;
/// these warnings surface only through `check`.
fn shift_date_warnings(date: &str) -> Vec<String> {
    let parts: Vec<&str> = date.split(" to ").collect();
    if parts.len() != 2 {
        return vec![format!(
            "'{}' does not split on \" to \"; the calendar will drop this shift",
            date
        )];
    }

    parts
        .iter()
        .filter(|part| NaiveDate::parse_from_str(part, "%Y-%m-%d").is_err())
        .map(|part| format!("'{}' is not an ISO date (YYYY-MM-DD)", part))
        .collect()
}

/// Print a single tour as JSON.
fn show(name: &str, tours_dir: &Path) -> CliResult<()> {
    let log: Arc<dyn EventLog> = Arc::new(JsonLogger::new());
    let store = TourStore::new(tours_dir, log);

    let Some(tour) = store.find_by_name(name) else {
        return Err(CliError::not_found(format!("no tour named '{}'", name)));
    };

    let rendered = serde_json::to_string_pretty(&tour)
        .map_err(|e| CliError::io_error(format!("Failed to render tour: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}
