//! transcheck - translation progress reporting.
//!
//! Reads a source-mapping CSV that tracks the translation status of each
//! source file, groups the rows by module category, and renders a progress
//! report with suggestions for what to work on next.
//!
//! The pipeline is linear and every stage is a plain function:
//!
//! ```ignore
//! let content = tracking::load_tracking_file(path)?;
//! let entries = tracking::parse_entries(&content)?;
//! let analysis = analysis::aggregate(&entries);
//! let steps = analysis::suggest(&analysis, 3);
//! let text = cli::report::render_text(&analysis, &steps, todo, RenderOptions::default());
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod theme;
pub mod tracking;

pub use error::{Result, TrackingError};
