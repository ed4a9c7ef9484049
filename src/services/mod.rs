// SPDX-License-Identifier: MIT

//! Services module - classification pipeline and query layer.

pub mod aggregate;
pub mod collection;
pub mod loader;
pub mod search;

pub use aggregate::WeekdayDistanceReport;
pub use collection::RecordCollection;
pub use search::{SearchMatch, SearchResults};
