// SPDX-License-Identifier: MIT

//! Plain aggregate rows consumed by charting and table layers.

use serde::Serialize;

use crate::models::record::ActivityKind;

/// How often an activity kind occurs among completed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub activity: ActivityKind,
    pub count: u32,
}

/// Mean distance (km) for one activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityMean {
    pub activity: ActivityKind,
    pub mean: f64,
}

/// One completed event with a positive distance, keyed by weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub weekday: &'static str,
    pub distance: f64,
    pub activity: ActivityKind,
}

/// Mean distance (km) for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayMean {
    pub weekday: &'static str,
    pub mean: f64,
}
