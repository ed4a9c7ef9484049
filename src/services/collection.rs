// SPDX-License-Identifier: MIT

//! Ordered, immutable store of classified records with cached views.

use crate::models::{Category, RawPost, Record};

/// All classified records in input order, plus the two derived views the
/// aggregate and search layers work from. Built once at load time and
/// read-only afterwards; a changed dataset means a wholesale rebuild.
#[derive(Debug, Default)]
pub struct RecordCollection {
    records: Vec<Record>,
    /// Indices of completed events, in input order
    completed: Vec<usize>,
    /// Indices of completed events with user commentary, in input order
    searchable: Vec<usize>,
}

impl RecordCollection {
    /// Classify raw posts and build the views.
    ///
    /// Posts whose `created_at` cannot be parsed are skipped with a
    /// warning. A sentinel weekday would distort every weekday aggregate,
    /// so dropped records are the documented policy here.
    pub fn from_raw(posts: Vec<RawPost>) -> Self {
        let total = posts.len();
        let mut records = Vec::with_capacity(total);

        for post in posts {
            match Record::classify(&post.text, &post.created_at) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(
                        created_at = %post.created_at,
                        error = %err,
                        "Skipping post with unparseable timestamp"
                    );
                }
            }
        }

        let skipped = total - records.len();
        if skipped > 0 {
            tracing::warn!(skipped, total, "Some posts were dropped during intake");
        }

        let completed: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category == Category::CompletedEvent)
            .map(|(i, _)| i)
            .collect();

        let searchable: Vec<usize> = completed
            .iter()
            .copied()
            .filter(|&i| records[i].written)
            .collect();

        tracing::info!(
            records = records.len(),
            completed = completed.len(),
            searchable = searchable.len(),
            "Record collection built"
        );

        Self {
            records,
            completed,
            searchable,
        }
    }

    /// All records in input order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Completed events, in input order.
    pub fn completed(&self) -> impl Iterator<Item = &Record> + '_ {
        self.completed.iter().map(|&i| &self.records[i])
    }

    /// Completed events with user commentary, in input order.
    pub fn searchable(&self) -> impl Iterator<Item = &Record> + '_ {
        self.searchable.iter().map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
