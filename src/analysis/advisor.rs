//! "What to work on next" heuristics.

use serde::Serialize;

use super::stats::{Analysis, ModuleStats};

/// A module named in the next-steps list with the count that ranked it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Module category name.
    pub module: String,
    /// In-progress files (for `finish`) or not-started files (for `start`).
    pub files: usize,
}

/// Advisory output of [`suggest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    /// Modules with in-progress files, most in-progress first.
    #[serde(rename = "in_progress")]
    pub finish: Vec<Suggestion>,
    /// Untouched modules (nothing complete), smallest backlog first.
    #[serde(rename = "not_started")]
    pub start: Vec<Suggestion>,
}

impl NextSteps {
    /// True when there is nothing to suggest.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.finish.is_empty() && self.start.is_empty()
    }
}

/// Picks modules worth finishing and modules worth starting.
///
/// Both sorts are stable, so modules with equal counts keep first-seen
/// order. At most `max_start` modules are suggested for starting.
#[must_use]
pub fn suggest(analysis: &Analysis, max_start: usize) -> NextSteps {
    let mut finish: Vec<&ModuleStats> = analysis
        .by_module
        .iter()
        .filter(|m| m.counts.in_progress > 0)
        .collect();
    finish.sort_by(|a, b| b.counts.in_progress.cmp(&a.counts.in_progress));

    let mut start: Vec<&ModuleStats> = analysis
        .by_module
        .iter()
        .filter(|m| m.counts.not_started > 0 && m.counts.complete == 0)
        .collect();
    start.sort_by_key(|m| m.counts.not_started);

    NextSteps {
        finish: finish
            .into_iter()
            .map(|m| Suggestion {
                module: m.name.clone(),
                files: m.counts.in_progress,
            })
            .collect(),
        start: start
            .into_iter()
            .take(max_start)
            .map(|m| Suggestion {
                module: m.name.clone(),
                files: m.counts.not_started,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stats::{aggregate, StatusCounts};
    use crate::tracking::{Entry, Status};

    fn module(name: &str, complete: usize, in_progress: usize, not_started: usize) -> ModuleStats {
        ModuleStats {
            name: name.to_string(),
            counts: StatusCounts {
                complete,
                in_progress,
                not_started,
            },
        }
    }

    fn analysis(modules: Vec<ModuleStats>) -> Analysis {
        let mut status_count = StatusCounts::default();
        for m in &modules {
            status_count.complete += m.counts.complete;
            status_count.in_progress += m.counts.in_progress;
            status_count.not_started += m.counts.not_started;
        }
        Analysis {
            total: status_count.total(),
            by_module: modules,
            status_count,
        }
    }

    fn names(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.module.as_str()).collect()
    }

    #[test]
    fn test_finish_sorted_descending() {
        let steps = suggest(
            &analysis(vec![module("moduleA", 0, 2, 1), module("moduleB", 1, 5, 0)]),
            3,
        );
        assert_eq!(names(&steps.finish), vec!["moduleB", "moduleA"]);
        assert_eq!(steps.finish[0].files, 5);
    }

    #[test]
    fn test_finish_ties_keep_order() {
        let steps = suggest(
            &analysis(vec![
                module("first", 0, 2, 0),
                module("second", 0, 3, 0),
                module("third", 0, 2, 0),
            ]),
            3,
        );
        assert_eq!(names(&steps.finish), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_start_excludes_modules_with_progress() {
        let steps = suggest(
            &analysis(vec![
                module("done_some", 1, 0, 4),
                module("untouched", 0, 0, 6),
                module("busy", 0, 1, 2),
            ]),
            3,
        );
        assert_eq!(names(&steps.start), vec!["busy", "untouched"]);
    }

    #[test]
    fn test_start_ascending_and_capped() {
        let steps = suggest(
            &analysis(vec![
                module("big", 0, 0, 9),
                module("small", 0, 0, 1),
                module("medium", 0, 0, 4),
                module("tiny", 0, 0, 1),
            ]),
            3,
        );
        assert_eq!(names(&steps.start), vec!["small", "tiny", "medium"]);
    }

    #[test]
    fn test_start_cap_of_zero() {
        let steps = suggest(&analysis(vec![module("untouched", 0, 0, 3)]), 0);
        assert!(steps.start.is_empty());
    }

    #[test]
    fn test_all_complete_is_empty() {
        let entries = vec![
            Entry {
                line: 2,
                module: "core".to_string(),
                status: Status::Complete,
            },
            Entry {
                line: 3,
                module: "ui".to_string(),
                status: Status::Complete,
            },
        ];
        let steps = suggest(&aggregate(&entries), 3);
        assert!(steps.is_empty());
    }
}
