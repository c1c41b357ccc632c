//! tourcal - Read-only HTTP API serving tour schedules to a calendar widget
//!
//! Tours live as one JSON file each in a directory on disk; the store
//! re-reads them on every request and the HTTP layer projects their
//! shifts into calendar events.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
