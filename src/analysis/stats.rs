//! Per-module and overall status counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::tracking::{Entry, Status};

/// Counters for the three translation states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Rows marked `complete`.
    pub complete: usize,
    /// Rows marked `in-progress`.
    pub in_progress: usize,
    /// Rows marked `not-started`.
    pub not_started: usize,
}

impl StatusCounts {
    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Complete => self.complete,
            Status::InProgress => self.in_progress,
            Status::NotStarted => self.not_started,
        }
    }

    /// Sum of all three counters.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.complete + self.in_progress + self.not_started
    }

    fn record(&mut self, status: Status) {
        match status {
            Status::Complete => self.complete += 1,
            Status::InProgress => self.in_progress += 1,
            Status::NotStarted => self.not_started += 1,
        }
    }
}

/// Counts for one module category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleStats {
    /// Module category name as written in the file.
    pub name: String,
    /// Status counters for rows in this module.
    pub counts: StatusCounts,
}

impl ModuleStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            counts: StatusCounts::default(),
        }
    }

    /// Number of rows in this module.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.counts.total()
    }
}

/// Aggregated view of the whole tracking file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Modules in first-seen order.
    pub by_module: Vec<ModuleStats>,
    /// Overall status counters.
    pub status_count: StatusCounts,
    /// Number of data rows.
    pub total: usize,
}

impl Analysis {
    /// True when the file had no data rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Builds an [`Analysis`] from validated entries.
///
/// Modules keep the order in which they first appear.
#[must_use]
pub fn aggregate(entries: &[Entry]) -> Analysis {
    let mut by_module: Vec<ModuleStats> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut status_count = StatusCounts::default();

    for entry in entries {
        let slot = *index.entry(entry.module.as_str()).or_insert_with(|| {
            by_module.push(ModuleStats::new(&entry.module));
            by_module.len() - 1
        });
        by_module[slot].counts.record(entry.status);
        status_count.record(entry.status);
    }

    tracing::debug!(
        rows = entries.len(),
        modules = by_module.len(),
        "aggregated tracking entries"
    );

    Analysis {
        by_module,
        status_count,
        total: entries.len(),
    }
}

/// `count / total` as a whole percentage, rounding halves up.
///
/// Returns `None` when `total` is zero.
#[must_use]
pub fn percent(count: usize, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some((count * 200 + total) / (total * 2))
}
