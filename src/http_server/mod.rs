//! # tourcal HTTP server module
//!
//! Thin glue over the tour store: category filtering, date-range
//! splitting, sorting, and CORS. Every request triggers a fresh directory
//! scan in the store; nothing is cached between requests.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/tours/dates` - Calendar events, optional `category` filter
//! - `/tours/categories` - Distinct category list

pub mod config;
pub mod server;
pub mod tour_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use tour_routes::{CalendarEvent, EventProps, TourState};
