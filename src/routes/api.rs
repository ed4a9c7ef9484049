// SPDX-License-Identifier: MIT

//! API routes serving aggregate rows and search results.

use crate::models::{ActivityCount, DistanceRow, WeekdayMean};
use crate::services::{aggregate, search};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How many activity kinds the summary sentences talk about.
const SUMMARY_TOP_N: usize = 3;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/summary", get(get_summary))
        .route("/api/activities", get(get_activities))
        .route("/api/distances", get(get_distances))
        .route("/api/search", get(get_search))
}

// ─── Summary ─────────────────────────────────────────────────

/// Filled-in values for the dashboard's summary sentences.
#[derive(Serialize)]
pub struct SummaryResponse {
    /// Number of distinct activity kinds among completed events
    pub number_activities: usize,
    pub first_most: String,
    pub second_most: String,
    pub third_most: String,
    /// Of the top three, the kind with the highest mean distance
    pub longest_activity_type: String,
    pub shortest_activity_type: String,
    /// "the weekend" or "weekdays", whichever holds the longest mean
    pub weekday_or_weekend: String,
}

/// Summary values over the whole collection.
///
/// Missing top-3 slots come back as "N/A" so the consumer can print the
/// sentence verbatim.
async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let collection = &state.collection;

    let counts = aggregate::counts_by_activity(collection);
    let top = aggregate::top_n(collection, SUMMARY_TOP_N);
    let slot = |i: usize| {
        top.get(i)
            .map(|c| c.activity.label().to_string())
            .unwrap_or_else(|| "N/A".to_string())
    };

    let top_kinds: Vec<_> = top.iter().map(|c| c.activity).collect();
    let means = aggregate::mean_distance_by_activity(collection, &top_kinds);
    let longest = means
        .first()
        .map(|m| m.activity.label().to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let shortest = means
        .last()
        .map(|m| m.activity.label().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let weekday_report = aggregate::mean_distance_by_weekday(collection, &top_kinds);
    let weekday_or_weekend = if weekday_report.longest_on_weekend {
        "the weekend"
    } else {
        "weekdays"
    };

    Json(SummaryResponse {
        number_activities: counts.len(),
        first_most: slot(0),
        second_most: slot(1),
        third_most: slot(2),
        longest_activity_type: longest,
        shortest_activity_type: shortest,
        weekday_or_weekend: weekday_or_weekend.to_string(),
    })
}

// ─── Activity counts ─────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivitiesResponse {
    /// Ranked by count descending, ties in first-seen order
    pub activities: Vec<ActivityCount>,
}

/// Completed-event counts per activity kind.
async fn get_activities(State(state): State<Arc<AppState>>) -> Json<ActivitiesResponse> {
    let activities = aggregate::counts_by_activity(&state.collection);
    tracing::debug!(distinct = activities.len(), "Serving activity counts");
    Json(ActivitiesResponse { activities })
}

// ─── Distances by weekday ────────────────────────────────────

#[derive(Serialize)]
pub struct DistancesResponse {
    /// Raw (weekday, distance, activity) rows for the top activities
    pub rows: Vec<DistanceRow>,
    /// Mean distance per weekday, Sun..Sat
    pub per_day: Vec<WeekdayMean>,
    pub longest_day: String,
    pub longest_on_weekend: bool,
}

/// Distance rows and per-weekday means for the top-3 activity kinds.
async fn get_distances(State(state): State<Arc<AppState>>) -> Json<DistancesResponse> {
    let collection = &state.collection;
    let top_kinds: Vec<_> = aggregate::top_n(collection, SUMMARY_TOP_N)
        .iter()
        .map(|c| c.activity)
        .collect();

    let report = aggregate::mean_distance_by_weekday(collection, &top_kinds);
    Json(DistancesResponse {
        rows: report.rows,
        per_day: report.per_day,
        longest_day: report.longest_day.to_string(),
        longest_on_weekend: report.longest_on_weekend,
    })
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct SearchQuery {
    /// Literal term; empty or missing yields a defined empty result
    #[serde(default)]
    term: String,
}

/// Case-insensitive literal search over written completed events.
async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<search::SearchResults> {
    let results = search::search(&state.collection, &params.term);
    tracing::debug!(term = %results.term, count = results.count, "Search served");
    Json(results)
}
