//! Tour data types
//!
//! One JSON file on disk holds one [`Tour`]; its scheduled occurrences
//! live in the `dates` array as [`Shift`] records.

use serde::{Deserialize, Serialize};

/// A bookable trip offering with one or more scheduled shifts.
///
/// `name` is the lookup key in practice; `id` is carried as data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    /// Scheduled shifts, in file order
    pub dates: Vec<Shift>,
    pub start_location: String,
    pub contact: String,
    /// Photo URLs, in file order
    pub photos: Vec<String>,
    /// Video URLs, in file order
    pub videos: Vec<String>,
}

/// One scheduled occurrence of a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift label (e.g. "A")
    pub shift: String,
    /// Opaque date range, expected format `"<start> to <end>"`
    pub date: String,
    pub price: i64,
    /// Remaining capacity
    pub places: i64,
}

/// A flattened per-shift record tagged with its tour's name and category.
///
/// Intermediate form between [`Tour`] and the calendar events the HTTP
/// layer serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourDate {
    pub tour_name: String,
    pub shift: String,
    pub date: String,
    pub price: i64,
    pub places: i64,
    pub category: String,
}
