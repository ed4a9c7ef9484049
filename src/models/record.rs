// SPDX-License-Identifier: MIT

//! Post record model: classification of raw fitness-tracker auto-posts.
//!
//! A [`Record`] is derived once from a post's text and timestamp and never
//! mutated afterwards. All derived fields are pure functions of the text,
//! so classifying the same post twice yields identical records.

use chrono::{DateTime, Datelike, Utc, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::AppError;
use crate::time_utils::parse_post_timestamp;

/// Raw post as it appears in the saved dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub text: String,
    pub created_at: String,
}

/// Semantic category of a post, decided by an ordered rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Live-broadcast announcement ("Watch my run right now", #RKLive)
    LiveEvent,
    /// Personal records, goals, fitness alerts
    Achievement,
    /// A finished, posted activity
    CompletedEvent,
    Miscellaneous,
}

/// Activity kind named in a completed-event post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "mtn bike")]
    MtnBike,
    #[serde(rename = "bike")]
    Bike,
    #[serde(rename = "run")]
    Run,
    #[serde(rename = "walk")]
    Walk,
    #[serde(rename = "hike")]
    Hike,
    #[serde(rename = "swim")]
    Swim,
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "elliptical")]
    Elliptical,
    #[serde(rename = "meditation")]
    Meditation,
    #[serde(rename = "freestyle")]
    Freestyle,
    #[serde(rename = "circuit")]
    Circuit,
    /// Completed event whose text names no recognized activity
    #[serde(rename = "activity")]
    Generic,
    /// Not a completed event
    #[serde(rename = "unknown")]
    Unknown,
}

impl ActivityKind {
    /// Display label, matching the dataset's own vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::MtnBike => "mtn bike",
            ActivityKind::Bike => "bike",
            ActivityKind::Run => "run",
            ActivityKind::Walk => "walk",
            ActivityKind::Hike => "hike",
            ActivityKind::Swim => "swim",
            ActivityKind::Row => "row",
            ActivityKind::Elliptical => "elliptical",
            ActivityKind::Meditation => "meditation",
            ActivityKind::Freestyle => "freestyle",
            ActivityKind::Circuit => "circuit",
            ActivityKind::Generic => "activity",
            ActivityKind::Unknown => "unknown",
        }
    }
}

/// Kilometres per statute mile, for normalizing `mi` distances.
const KM_PER_MILE: f64 = 1.60934;

/// Separator between the auto-generated summary and user commentary.
const WRITTEN_SEPARATOR: &str = " - ";

/// Classified post record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Verbatim post text
    pub text: String,
    /// Post timestamp, normalized to UTC
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    /// `Unknown` unless `category` is `CompletedEvent`
    pub activity: ActivityKind,
    /// Distance in kilometres; 0 when absent or not a completed event
    pub distance: f64,
    /// Whether the post carries user commentary after `" - "`
    pub written: bool,
    /// Cleaned user commentary (URLs and #runkeeper stripped, trimmed)
    pub written_text: String,
}

impl Record {
    /// Classify a raw post.
    ///
    /// Total over arbitrary text: malformed text degrades to
    /// `Miscellaneous`/`Unknown`/distance 0. Only an unparseable
    /// `created_at` is an error.
    pub fn classify(text: &str, created_at: &str) -> Result<Self, AppError> {
        let timestamp = parse_post_timestamp(created_at)
            .ok_or_else(|| AppError::InvalidTimestamp(created_at.to_string()))?;
        Ok(Self::from_parts(text, timestamp))
    }

    fn from_parts(text: &str, timestamp: DateTime<Utc>) -> Self {
        let lower = text.to_lowercase();
        let category = categorize(&lower);

        // Activity, distance and commentary are only meaningful for
        // completed events; everything else gets the defaults.
        let (activity, distance, written, written_text) = if category == Category::CompletedEvent {
            let written = text.contains(WRITTEN_SEPARATOR);
            let written_text = if written {
                clean_written_text(text)
            } else {
                String::new()
            };
            (activity_kind(&lower), parse_distance(&lower), written, written_text)
        } else {
            (ActivityKind::Unknown, 0.0, false, String::new())
        };

        Self {
            text: text.to_string(),
            timestamp,
            category,
            activity,
            distance,
            written,
            written_text,
        }
    }

    /// Weekday of the post, derived from its timestamp.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// The text that search runs against: user commentary when present,
    /// otherwise the raw post text.
    pub fn haystack(&self) -> &str {
        if self.written_text.is_empty() {
            &self.text
        } else {
            &self.written_text
        }
    }

    /// Canonical table-row projection for list views. Escaping and markup
    /// are the consumer's job.
    pub fn table_row(&self) -> TableRow {
        TableRow {
            activity: self.activity,
            url: first_url(&self.text),
            body: self.haystack().to_string(),
        }
    }
}

/// Plain row for table consumers: activity label, outbound link, body text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub activity: ActivityKind,
    /// First URL in the raw text, if any
    pub url: Option<String>,
    pub body: String,
}

/// Category cascade, first match wins. The rules are not mutually
/// exclusive by raw substring, so the order is load-bearing.
fn categorize(lower: &str) -> Category {
    if lower.contains("#rklive") || (lower.contains("watch my") && lower.contains(" live")) {
        return Category::LiveEvent;
    }
    if lower.contains("achieved a new personal record")
        || lower.starts_with("i just set a goal")
        || lower.contains("#fitnessalerts")
    {
        return Category::Achievement;
    }
    if lower.starts_with("just completed a") || lower.starts_with("just posted a") {
        return Category::CompletedEvent;
    }
    Category::Miscellaneous
}

/// Activity cascade, first match wins, specific before general.
///
/// The leading space on most tokens is a deliberate word boundary: it
/// stops "run" from matching inside "brunch". A token at the very start
/// of the string has no preceding space and will not match; keep it so.
const ACTIVITY_RULES: &[(&str, ActivityKind)] = &[
    ("mtn bike", ActivityKind::MtnBike),
    (" bike", ActivityKind::Bike),
    (" run", ActivityKind::Run),
    (" walk", ActivityKind::Walk),
    (" hike", ActivityKind::Hike),
    (" swim", ActivityKind::Swim),
    (" row", ActivityKind::Row),
    (" elliptical", ActivityKind::Elliptical),
    (" meditation", ActivityKind::Meditation),
    ("freestyle", ActivityKind::Freestyle),
    (" circuit", ActivityKind::Circuit),
];

fn activity_kind(lower: &str) -> ActivityKind {
    ACTIVITY_RULES
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|&(_, kind)| kind)
        .unwrap_or(ActivityKind::Generic)
}

fn km_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s?km\b").expect("static pattern"))
}

fn mi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s?mi\b").expect("static pattern"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").expect("static pattern"))
}

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)#runkeeper").expect("static pattern"))
}

/// Distance in kilometres from the first `km` occurrence, else the first
/// `mi` occurrence converted, else 0. The `km` pattern is consulted first
/// and exclusively when it matches.
fn parse_distance(lower: &str) -> f64 {
    if let Some(caps) = km_re().captures(lower) {
        return caps[1].parse().unwrap_or(0.0);
    }
    if let Some(caps) = mi_re().captures(lower) {
        return caps[1].parse::<f64>().unwrap_or(0.0) * KM_PER_MILE;
    }
    0.0
}

/// Everything after the first `" - "`, with URLs and the #runkeeper tag
/// stripped, then trimmed.
fn clean_written_text(text: &str) -> String {
    let after = match text.split_once(WRITTEN_SEPARATOR) {
        Some((_, rest)) => rest,
        None => return String::new(),
    };
    let no_urls = url_re().replace_all(after, "");
    let no_tag = hashtag_re().replace_all(&no_urls, "");
    no_tag.trim().to_string()
}

/// First URL in a text, for link rendering.
fn first_url(text: &str) -> Option<String> {
    url_re().find(text).map(|m| m.as_str().to_string())
}
