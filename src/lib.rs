// SPDX-License-Identifier: MIT

//! Paceline: analytics over fitness-tracker auto-posts
//!
//! This crate classifies short free-text posts from a fitness tracker's
//! share feature into semantic categories, extracts structured facts
//! (activity kind, distance, user commentary), and serves aggregate rows
//! and text search results over the classified records.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RecordCollection;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub collection: RecordCollection,
}
