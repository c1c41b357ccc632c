//! Tour store subsystem
//!
//! The data-loading and transformation layer: reads a directory of JSON
//! files (one tour per file), validates each against the tour shape, and
//! flattens per-tour shifts into calendar-ready records.
//!
//! # Design principles
//!
//! - Every call re-reads the directory; no caching, no write path
//! - A malformed file is logged and skipped, never fatal
//! - Validation checks field presence and exact types, no coercion

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{FieldIssue, StoreError, StoreResult};
pub use loader::TourStore;
pub use types::{Shift, Tour, TourDate};
pub use validator::validate_tour;
