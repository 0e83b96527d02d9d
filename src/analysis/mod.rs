//! Aggregation of tracking entries and next-step suggestions.

pub mod advisor;
pub mod stats;

pub use advisor::{suggest, NextSteps, Suggestion};
pub use stats::{aggregate, percent, Analysis, ModuleStats, StatusCounts};
