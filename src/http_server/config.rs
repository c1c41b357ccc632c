//! HTTP server configuration
//!
//! Host, port, CORS origins, and the tours directory. Origins come from
//! the `ALLOWED_ORIGINS` environment variable (comma-separated); the tours
//! directory from `TOURS_DIR`.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Origin granted CORS access when nothing is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://inforestsbot-calendar.vercel.app";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Directory containing one JSON file per tour (default: "tours")
    #[serde(default = "default_tours_dir")]
    pub tours_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

fn default_tours_dir() -> PathBuf {
    PathBuf::from("tours")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            tours_dir: default_tours_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Build a config from the environment.
    ///
    /// `ALLOWED_ORIGINS` is a comma-separated origin list; entries are
    /// trimmed and empty entries dropped. `TOURS_DIR` overrides the tour
    /// directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var("ALLOWED_ORIGINS") {
            config.cors_origins = parse_origins(&raw);
        }
        if let Ok(dir) = env::var("TOURS_DIR") {
            config.tours_dir = PathBuf::from(dir);
        }
        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated origin list, trimming entries and dropping
/// empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, vec![DEFAULT_ALLOWED_ORIGIN]);
        assert_eq!(config.tours_dir, PathBuf::from("tours"));
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_origins_trims_and_drops_empties() {
        let origins = parse_origins(" https://a.example , ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ,").is_empty());
    }

    #[test]
    fn test_config_from_json_applies_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, vec![DEFAULT_ALLOWED_ORIGIN]);
    }

    #[test]
    fn test_config_from_json_overrides() {
        let config: HttpServerConfig = serde_json::from_str(
            r#"{"port": 9000, "cors_origins": ["https://a.example"], "tours_dir": "/data/tours"}"#,
        )
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["https://a.example"]);
        assert_eq!(config.tours_dir, PathBuf::from("/data/tours"));
    }
}
