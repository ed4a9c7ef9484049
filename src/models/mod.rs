// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod record;
pub mod report;

pub use record::{ActivityKind, Category, RawPost, Record, TableRow};
pub use report::{ActivityCount, ActivityMean, DistanceRow, WeekdayMean};
