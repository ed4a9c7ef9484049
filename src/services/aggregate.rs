// SPDX-License-Identifier: MIT

//! Aggregations over a record collection: activity counts, top-N ranking,
//! and mean distances by activity and weekday.
//!
//! Everything here is a pure function over a collection snapshot; ranking
//! ties are broken by first-encountered order (all sorts are stable).

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{ActivityCount, ActivityKind, ActivityMean, DistanceRow, WeekdayMean};
use crate::services::collection::RecordCollection;
use crate::time_utils::{is_weekend, weekday_abbrev, WEEKDAY_ORDER};

/// Count completed events per activity kind, excluding `Unknown`.
///
/// Returns rows ranked by count descending; kinds with equal counts keep
/// the order in which they first appeared in the data.
pub fn counts_by_activity(collection: &RecordCollection) -> Vec<ActivityCount> {
    let mut order: Vec<ActivityKind> = Vec::new();
    let mut counts: HashMap<ActivityKind, u32> = HashMap::new();

    for record in collection.completed() {
        if record.activity == ActivityKind::Unknown {
            continue;
        }
        match counts.get_mut(&record.activity) {
            Some(n) => *n += 1,
            None => {
                counts.insert(record.activity, 1);
                order.push(record.activity);
            }
        }
    }

    let mut ranked: Vec<ActivityCount> = order
        .into_iter()
        .map(|activity| ActivityCount {
            activity,
            count: counts[&activity],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// First `n` entries of the activity ranking. Returns fewer when fewer
/// distinct kinds exist; callers render missing slots as "N/A".
pub fn top_n(collection: &RecordCollection, n: usize) -> Vec<ActivityCount> {
    let mut ranked = counts_by_activity(collection);
    ranked.truncate(n);
    ranked
}

/// Mean distance per named activity kind, ranked descending.
///
/// The mean skips non-finite values and is 0 for a kind with no completed
/// events. Equal means keep the input order of `kinds`.
pub fn mean_distance_by_activity(
    collection: &RecordCollection,
    kinds: &[ActivityKind],
) -> Vec<ActivityMean> {
    let mut means: Vec<ActivityMean> = kinds
        .iter()
        .map(|&activity| ActivityMean {
            activity,
            mean: mean(
                collection
                    .completed()
                    .filter(|r| r.activity == activity)
                    .map(|r| r.distance),
            ),
        })
        .collect();
    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means
}

/// Weekday distance report for a set of activity kinds.
#[derive(Debug, Clone, Serialize)]
pub struct WeekdayDistanceReport {
    /// One row per completed event with distance > 0, for raw scatter views
    pub rows: Vec<DistanceRow>,
    /// Mean distance per weekday, in Sun..Sat order
    pub per_day: Vec<WeekdayMean>,
    /// Weekday with the highest mean; Sun when every mean is 0
    pub longest_day: &'static str,
    /// Whether `longest_day` falls on the weekend
    pub longest_on_weekend: bool,
}

/// Group distances by weekday for the given kinds and find the day with
/// the highest mean.
///
/// Only completed events with distance > 0 participate. The comparison
/// baseline is (Sun, -1), so a dataset with no qualifying rows reports
/// Sun, and earlier days win ties in the fixed Sun..Sat order.
pub fn mean_distance_by_weekday(
    collection: &RecordCollection,
    kinds: &[ActivityKind],
) -> WeekdayDistanceReport {
    let rows: Vec<DistanceRow> = collection
        .completed()
        .filter(|r| kinds.contains(&r.activity) && r.distance > 0.0)
        .map(|r| DistanceRow {
            weekday: weekday_abbrev(r.weekday()),
            distance: r.distance,
            activity: r.activity,
        })
        .collect();

    let per_day: Vec<WeekdayMean> = WEEKDAY_ORDER
        .iter()
        .map(|&day| {
            let abbrev = weekday_abbrev(day);
            WeekdayMean {
                weekday: abbrev,
                mean: mean(
                    rows.iter()
                        .filter(|row| row.weekday == abbrev)
                        .map(|row| row.distance),
                ),
            }
        })
        .collect();

    let mut longest_day = "Sun";
    let mut longest_mean = -1.0;
    for day in &per_day {
        if day.mean > longest_mean {
            longest_day = day.weekday;
            longest_mean = day.mean;
        }
    }

    WeekdayDistanceReport {
        rows,
        per_day,
        longest_day,
        longest_on_weekend: is_weekend(longest_day),
    }
}

/// Mean of the finite values; 0 for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let finite: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        0.0
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    }
}
