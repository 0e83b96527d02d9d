//! Tracking file input: loading, parsing, and status validation.

pub mod loader;
pub mod parser;
pub mod record;
pub mod status;

pub use loader::load_tracking_file;
pub use parser::{entries, parse_entries, parse_table, Entry, Table};
pub use record::Record;
pub use status::Status;
