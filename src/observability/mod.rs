//! Observability subsystem for tourcal
//!
//! Provides structured JSON logging behind an injectable interface:
//!
//! - Observability is read-only, no side effects on request handling
//! - No async or background threads
//! - Deterministic output (sorted field keys)
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tourcal::observability::{EventLog, JsonLogger};
//!
//! let log: Arc<dyn EventLog> = Arc::new(JsonLogger::new());
//! log.info("TOURS_LOADED", &[("count", "42")]);
//! ```

mod logger;

pub use logger::{EventLog, JsonLogger, LogEntry, MemoryLog, Severity};
