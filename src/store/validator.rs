//! Tour file validation
//!
//! Explicit field-presence and type checks on parsed JSON:
//!
//! - All required fields must be present
//! - Field types must match exactly, no coercion, no defaults
//! - Undeclared extra fields are ignored
//! - Every missing/invalid field is collected, not just the first
//!
//! Validation is deterministic and does not mutate the document.

use serde_json::{Map, Value};

use super::errors::FieldIssue;
use super::types::{Shift, Tour};

/// Validates a parsed tour document.
///
/// Returns the typed [`Tour`] on success, or the full list of field issues
/// on failure.
pub fn validate_tour(document: &Value) -> Result<Tour, Vec<FieldIssue>> {
    let Some(obj) = document.as_object() else {
        return Err(vec![FieldIssue::type_mismatch(
            "$root",
            "object",
            json_type_name(document),
        )]);
    };

    let mut issues = Vec::new();

    let id = require_string(obj, "", "id", &mut issues);
    let category = require_string(obj, "", "category", &mut issues);
    let name = require_string(obj, "", "name", &mut issues);
    let description = require_string(obj, "", "description", &mut issues);
    let dates = require_shifts(obj, "dates", &mut issues);
    let start_location = require_string(obj, "", "start_location", &mut issues);
    let contact = require_string(obj, "", "contact", &mut issues);
    let photos = require_string_array(obj, "photos", &mut issues);
    let videos = require_string_array(obj, "videos", &mut issues);

    match (
        id,
        category,
        name,
        description,
        dates,
        start_location,
        contact,
        photos,
        videos,
    ) {
        (
            Some(id),
            Some(category),
            Some(name),
            Some(description),
            Some(dates),
            Some(start_location),
            Some(contact),
            Some(photos),
            Some(videos),
        ) if issues.is_empty() => Ok(Tour {
            id,
            category,
            name,
            description,
            dates,
            start_location,
            contact,
            photos,
            videos,
        }),
        _ => Err(issues),
    }
}

/// Validates one element of the `dates` array.
fn validate_shift(path: &str, value: &Value, issues: &mut Vec<FieldIssue>) -> Option<Shift> {
    let Some(obj) = value.as_object() else {
        issues.push(FieldIssue::type_mismatch(
            path,
            "object",
            json_type_name(value),
        ));
        return None;
    };

    let shift = require_string(obj, path, "shift", issues);
    let date = require_string(obj, path, "date", issues);
    let price = require_integer(obj, path, "price", issues);
    let places = require_integer(obj, path, "places", issues);

    match (shift, date, price, places) {
        (Some(shift), Some(date), Some(price), Some(places)) => Some(Shift {
            shift,
            date,
            price,
            places,
        }),
        _ => None,
    }
}

fn require_string(
    obj: &Map<String, Value>,
    prefix: &str,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(make_path(prefix, field)));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(
                make_path(prefix, field),
                "string",
                json_type_name(other),
            ));
            None
        }
    }
}

fn require_integer(
    obj: &Map<String, Value>,
    prefix: &str,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<i64> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(make_path(prefix, field)));
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                issues.push(FieldIssue::type_mismatch(
                    make_path(prefix, field),
                    "integer",
                    json_type_name(value),
                ));
                None
            }
        },
    }
}

fn require_string_array(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Vec<String>> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(field));
            None
        }
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            let mut valid = true;
            for (idx, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => {
                        issues.push(FieldIssue::type_mismatch(
                            format!("{}[{}]", field, idx),
                            "string",
                            json_type_name(other),
                        ));
                        valid = false;
                    }
                }
            }
            valid.then_some(out)
        }
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(
                field,
                "array",
                json_type_name(other),
            ));
            None
        }
    }
}

fn require_shifts(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Vec<Shift>> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(field));
            None
        }
        Some(Value::Array(items)) => {
            let mut shifts = Vec::with_capacity(items.len());
            let mut valid = true;
            for (idx, item) in items.iter().enumerate() {
                match validate_shift(&format!("{}[{}]", field, idx), item, issues) {
                    Some(shift) => shifts.push(shift),
                    None => valid = false,
                }
            }
            valid.then_some(shifts)
        }
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(
                field,
                "array",
                json_type_name(other),
            ));
            None
        }
    }
}

/// Builds a dotted field path for error messages.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Returns the JSON type name of a value for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
