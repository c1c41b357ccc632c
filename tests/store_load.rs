//! Tour Store Load Tests
//!
//! Directory-scan invariants:
//! - One entry per file that parses and validates
//! - Per-file failure isolation (a broken file never aborts the scan)
//! - Loading is deterministic for a fixed directory
//! - Flattening yields tours x shifts records

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use tourcal::observability::{MemoryLog, Severity};
use tourcal::store::TourStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_tour(dir: &Path, filename: &str, tour: &Value) {
    fs::write(dir.join(filename), serde_json::to_string(tour).unwrap()).unwrap();
}

fn tour_with_shifts(name: &str, category: &str, shifts: usize) -> Value {
    let dates: Vec<Value> = (0..shifts)
        .map(|i| {
            json!({
                "shift": format!("S{}", i),
                "date": format!("2024-0{}-01 to 2024-0{}-05", i + 1, i + 1),
                "price": 100,
                "places": 10
            })
        })
        .collect();

    json!({
        "id": format!("id-{}", name),
        "category": category,
        "name": name,
        "description": "desc",
        "dates": dates,
        "start_location": "Station",
        "contact": "contact",
        "photos": [],
        "videos": []
    })
}

fn setup_store(tmp: &TempDir) -> (Arc<MemoryLog>, TourStore) {
    let log = Arc::new(MemoryLog::new());
    let store = TourStore::new(tmp.path(), log.clone());
    (log, store)
}

// =============================================================================
// Load Isolation Tests
// =============================================================================

#[test]
fn test_one_entry_per_valid_file() {
    let tmp = TempDir::new().unwrap();
    for i in 0..5 {
        write_tour(
            tmp.path(),
            &format!("tour{}.json", i),
            &tour_with_shifts(&format!("Tour {}", i), "hiking", 1),
        );
    }
    let (_log, store) = setup_store(&tmp);

    assert_eq!(store.load_all().len(), 5);
}

#[test]
fn test_broken_files_isolated() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 1));
    write_tour(tmp.path(), "b.json", &tour_with_shifts("B", "hiking", 1));
    fs::write(tmp.path().join("c.json"), "{truncated").unwrap();

    let mut missing = tour_with_shifts("D", "hiking", 1);
    missing.as_object_mut().unwrap().remove("description");
    write_tour(tmp.path(), "d.json", &missing);

    let (log, store) = setup_store(&tmp);
    let tours = store.load_all();

    let mut names: Vec<&str> = tours.iter().map(|t| t.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["A", "B"]);

    // Both failures were logged as errors
    let skipped: Vec<_> = log
        .entries()
        .into_iter()
        .filter(|entry| entry.event == "TOUR_FILE_SKIPPED")
        .collect();
    assert_eq!(skipped.len(), 2);
    assert!(skipped.iter().all(|entry| entry.severity == Severity::Error));
}

#[test]
fn test_load_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 2));
    write_tour(tmp.path(), "b.json", &tour_with_shifts("B", "rafting", 3));
    let (_log, store) = setup_store(&tmp);

    let first = store.load_all();
    for _ in 0..5 {
        assert_eq!(store.load_all(), first);
    }
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_flatten_dates_is_tours_times_shifts() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 2));
    write_tour(tmp.path(), "b.json", &tour_with_shifts("B", "hiking", 3));
    write_tour(tmp.path(), "c.json", &tour_with_shifts("C", "rafting", 4));
    let (_log, store) = setup_store(&tmp);

    assert_eq!(store.flatten_dates().len(), 2 + 3 + 4);
}

#[test]
fn test_flattened_records_carry_tour_fields() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 2));
    let (_log, store) = setup_store(&tmp);

    for date in store.flatten_dates() {
        assert_eq!(date.tour_name, "A");
        assert_eq!(date.category, "hiking");
        assert_eq!(date.price, 100);
        assert_eq!(date.places, 10);
    }
}

#[test]
fn test_category_queries() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 1));
    write_tour(tmp.path(), "b.json", &tour_with_shifts("B", "hiking", 1));
    write_tour(tmp.path(), "c.json", &tour_with_shifts("C", "rafting", 1));
    let (_log, store) = setup_store(&tmp);

    let mut categories = store.list_categories();
    categories.sort();
    assert_eq!(categories, vec!["hiking", "rafting"]);

    assert_eq!(store.list_by_category("hiking").len(), 2);
    assert_eq!(store.list_by_category("rafting").len(), 1);
    assert!(store.list_by_category("diving").is_empty());
}

#[test]
fn test_name_lookup() {
    let tmp = TempDir::new().unwrap();
    write_tour(tmp.path(), "a.json", &tour_with_shifts("A", "hiking", 2));
    let (_log, store) = setup_store(&tmp);

    let found = store.find_by_name("A").unwrap();
    assert_eq!(found.dates.len(), 2);

    assert_eq!(store.dates_for_tour("A").len(), 2);
    assert!(store.dates_for_tour("missing").is_empty());
    assert!(store.find_by_name("missing").is_none());
}
