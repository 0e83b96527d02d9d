//! Application-wide constants.
//!
//! Default paths, tracking column names, report glyphs, and the fixed
//! strings printed by the progress report.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Tracking CSV, relative to the project root.
pub const DEFAULT_CSV_PATH: &str = "docs/matrix/react-source-mapping.csv";
/// Companion TODO document, relative to the project root.
pub const DEFAULT_TODO_PATH: &str = "docs/matrix/react-translation-todo.md";
/// Name of the config file inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Tracking Columns ===

/// Column holding the module grouping label.
pub const COLUMN_MODULE: &str = "module_category";
/// Column holding the translation status.
pub const COLUMN_STATUS: &str = "status";

// === Report Layout ===

/// Modules suggested under "consider starting" unless configured otherwise.
pub const DEFAULT_MAX_NEW_MODULES: usize = 3;
/// Width of the horizontal rule under the title.
pub const RULE_WIDTH: usize = 50;
/// Percentage points represented by one progress bar cell.
pub const BAR_STEP_PERCENT: usize = 5;

pub const GLYPH_COMPLETE: char = '█';
pub const GLYPH_IN_PROGRESS: char = '▓';
pub const GLYPH_NOT_STARTED: char = '░';
pub const GLYPH_RULE: char = '=';

// === Messages: Report ===

pub const MSG_TITLE: &str = "🚀 ReactCPP Translation Progress Report";
pub const MSG_OVERALL_HEADER: &str = "📊 Overall Progress:";
pub const MSG_MODULES_HEADER: &str = "📋 Progress by Module:";
pub const MSG_NEXT_STEPS_HEADER: &str = "🎯 Suggested Next Steps:";
pub const MSG_FINISH_HEADER: &str = "1. Complete in-progress modules:";
pub const MSG_START_HEADER: &str = "2. Consider starting these modules:";
pub const MSG_ALL_COMPLETE: &str = "All tracked files are complete. Nothing left to suggest.";
pub const MSG_NO_DATA: &str = "📭 No data: the tracking file has no rows to report on.";
pub const MSG_TODO_POINTER: &str = "🔗 For detailed TODO items, see:";

pub const LABEL_COMPLETE: &str = "✅ Complete";
pub const LABEL_IN_PROGRESS: &str = "🔄 In Progress";
pub const LABEL_NOT_STARTED: &str = "⛔ Not Started";

// === Messages: Errors ===

/// Prefix of the single error line written to standard error.
pub const ERR_PREFIX: &str = "❌";
pub const ERR_ANALYSIS_FAILED: &str = "Error analyzing translation progress";
