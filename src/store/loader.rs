//! Tour store: directory loading and queries
//!
//! - One JSON file per tour, scanned fresh on every call (no caching)
//! - A malformed file is logged and skipped, never aborts the scan
//! - A missing directory is logged and treated as zero tours

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::observability::EventLog;

use super::errors::{StoreError, StoreResult};
use super::types::{Shift, Tour, TourDate};
use super::validator::validate_tour;

/// Loads and queries tour files from a directory.
///
/// Tours are immutable once loaded; every method performs its own fresh
/// directory scan, so there is no shared state across requests.
pub struct TourStore {
    tours_dir: PathBuf,
    log: Arc<dyn EventLog>,
}

impl TourStore {
    /// Creates a store reading from the given directory.
    pub fn new(tours_dir: impl Into<PathBuf>, log: Arc<dyn EventLog>) -> Self {
        Self {
            tours_dir: tours_dir.into(),
            log,
        }
    }

    /// Returns the tours directory path.
    pub fn tours_dir(&self) -> &Path {
        &self.tours_dir
    }

    /// Loads every valid tour file in the directory.
    ///
    /// Returns one entry per file that reads, parses, and validates; order
    /// is the platform's directory listing order. Files that fail are
    /// logged and excluded.
    pub fn load_all(&self) -> Vec<Tour> {
        let mut tours = Vec::new();

        let entries = match fs::read_dir(&self.tours_dir) {
            Ok(entries) => entries,
            Err(err) => {
                self.log.error(
                    "TOURS_DIR_MISSING",
                    &[
                        ("dir", &self.tours_dir.display().to_string()),
                        ("error", &err.to_string()),
                    ],
                );
                return tours;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    self.log
                        .warn("DIR_ENTRY_UNREADABLE", &[("error", &err.to_string())]);
                    continue;
                }
            };

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            match self.load_file(&path) {
                Ok(tour) => tours.push(tour),
                Err(err) => {
                    self.log.error(
                        "TOUR_FILE_SKIPPED",
                        &[
                            ("path", &path.display().to_string()),
                            ("error", &err.to_string()),
                        ],
                    );
                }
            }
        }

        tours
    }

    /// Reads and validates a single tour file.
    pub fn load_file(&self, path: &Path) -> StoreResult<Tour> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document: Value = serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        validate_tour(&document).map_err(|issues| StoreError::Validation {
            path: path.to_path_buf(),
            issues,
        })
    }

    /// Distinct category values across all loaded tours.
    ///
    /// Deduplicated; order follows the first appearance in listing order.
    pub fn list_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for tour in self.load_all() {
            if seen.insert(tour.category.clone()) {
                categories.push(tour.category);
            }
        }
        categories
    }

    /// Tours whose category equals the given string (exact match).
    pub fn list_by_category(&self, category: &str) -> Vec<Tour> {
        self.load_all()
            .into_iter()
            .filter(|tour| tour.category == category)
            .collect()
    }

    /// First tour whose name equals the given string.
    pub fn find_by_name(&self, name: &str) -> Option<Tour> {
        self.load_all().into_iter().find(|tour| tour.name == name)
    }

    /// Shifts of the named tour, or empty if the tour is unknown.
    pub fn dates_for_tour(&self, name: &str) -> Vec<Shift> {
        self.find_by_name(name)
            .map(|tour| tour.dates)
            .unwrap_or_default()
    }

    /// One record per shift across all tours, tagged with the owning
    /// tour's name and category.
    pub fn flatten_dates(&self) -> Vec<TourDate> {
        let mut dates = Vec::new();
        for tour in self.load_all() {
            for shift in tour.dates {
                dates.push(TourDate {
                    tour_name: tour.name.clone(),
                    shift: shift.shift,
                    date: shift.date,
                    price: shift.price,
                    places: shift.places,
                    category: tour.category.clone(),
                });
            }
        }
        dates
    }
}
