//! Tour HTTP routes
//!
//! The endpoints consumed by the calendar widget:
//!
//! - `GET /dates?category=<s>` - calendar events sorted by start date
//! - `GET /categories` - distinct category strings
//! - `OPTIONS` on both - 200 with an empty JSON body
//!
//! Failures never surface as error statuses: dropped records are logged
//! and the response degrades to an empty array so the client stays simple.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::observability::EventLog;
use crate::store::TourStore;

/// Shared state for tour routes
pub struct TourState {
    pub store: TourStore,
    pub log: Arc<dyn EventLog>,
}

impl TourState {
    pub fn new(store: TourStore, log: Arc<dyn EventLog>) -> Self {
        Self { store, log }
    }
}

/// The calendar-display-ready projection of a tour's shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Tour name
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "extendedProps")]
    pub extended_props: EventProps,
}

/// Extra per-event fields the calendar widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventProps {
    pub shift: String,
    pub category: String,
    pub price: i64,
    pub places: i64,
}

#[derive(Debug, Deserialize)]
struct DatesQuery {
    category: Option<String>,
}

/// Create tour routes (nested under `/tours`)
pub fn tour_routes(state: Arc<TourState>) -> Router {
    Router::new()
        .route("/dates", get(dates_handler).options(preflight_handler))
        .route(
            "/categories",
            get(categories_handler).options(preflight_handler),
        )
        .with_state(state)
}

/// CORS preflight handler: 200 with an empty JSON body
async fn preflight_handler() -> Json<Value> {
    Json(json!({}))
}

/// `GET /tours/dates` handler
async fn dates_handler(
    State(state): State<Arc<TourState>>,
    Query(query): Query<DatesQuery>,
) -> Json<Vec<CalendarEvent>> {
    Json(calendar_events(&state, query.category.as_deref()))
}

/// `GET /tours/categories` handler
async fn categories_handler(State(state): State<Arc<TourState>>) -> Json<Vec<String>> {
    let categories = state.store.list_categories();
    state
        .log
        .info("CATEGORIES_SERVED", &[("count", &categories.len().to_string())]);
    Json(categories)
}

/// Builds the sorted event list for `/tours/dates`.
fn calendar_events(state: &TourState, category: Option<&str>) -> Vec<CalendarEvent> {
    let mut dates = state.store.flatten_dates();

    if let Some(category) = category {
        dates.retain(|date| date.category == category);
    }

    let mut events = Vec::with_capacity(dates.len());
    for date in dates {
        // The date range must split into exactly two parts on " to "
        let parts: Vec<&str> = date.date.split(" to ").collect();
        if parts.len() != 2 {
            state.log.warn(
                "MALFORMED_DATE_RANGE",
                &[("date", &date.date), ("tour", &date.tour_name)],
            );
            continue;
        }
        let start = parts[0].to_string();
        let end = parts[1].to_string();

        events.push(CalendarEvent {
            title: date.tour_name,
            start,
            end,
            extended_props: EventProps {
                shift: date.shift,
                category: date.category,
                price: date.price,
                places: date.places,
            },
        });
    }

    // Lexicographic sort on the raw start string, not calendar-aware
    events.sort_by(|a, b| a.start.cmp(&b.start));

    state
        .log
        .info("EVENTS_SERVED", &[("count", &events.len().to_string())]);
    events
}
