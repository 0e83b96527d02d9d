//! Tracking CSV parsing.
//!
//! The file is read in two steps: [`parse_table`] turns text into untyped
//! [`Record`]s keyed by the header row, then [`entries`] validates the two
//! columns the report needs and yields typed [`Entry`] values. Status
//! values are checked here so aggregation never sees an unknown state.

use crate::constants::{COLUMN_MODULE, COLUMN_STATUS};
use crate::error::{Result, TrackingError};

use super::record::Record;
use super::status::Status;

/// Header row plus data rows of a tracking file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names from the first line.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub records: Vec<Record>,
}

/// A validated tracking row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// 1-based source line.
    pub line: usize,
    /// Value of `module_category`.
    pub module: String,
    /// Parsed `status`.
    pub status: Status,
}

/// Parses CSV text into a [`Table`].
///
/// Surrounding whitespace is trimmed first. Rows shorter than the header
/// are padded with empty values and longer rows are truncated. Blank lines
/// are skipped.
///
/// # Errors
///
/// Returns [`TrackingError::Csv`] if the reader rejects the input.
pub fn parse_table(content: &str) -> Result<Table> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Table::default());
    }

    // Keep reported line numbers relative to the untrimmed file.
    let leading = content.len() - content.trim_start().len();
    let skipped_lines = content[..leading].matches('\n').count();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(trimmed.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .unwrap_or_default()
            + skipped_lines;
        records.push(Record::from_row(
            line,
            headers.iter().map(String::as_str),
            row.iter(),
        ));
    }

    tracing::trace!(columns = headers.len(), rows = records.len(), "parsed table");
    Ok(Table { headers, records })
}

/// Validates a parsed table into typed entries.
///
/// An empty table (no header row at all) yields no entries.
///
/// # Errors
///
/// * [`TrackingError::MissingColumn`] if the header lacks `module_category`
///   or `status`.
/// * [`TrackingError::InvalidStatus`] naming the first row whose status is
///   not one of the known values.
pub fn entries(table: &Table) -> Result<Vec<Entry>> {
    if table.headers.is_empty() {
        return Ok(Vec::new());
    }

    for column in [COLUMN_MODULE, COLUMN_STATUS] {
        if !table.headers.iter().any(|h| h == column) {
            return Err(TrackingError::MissingColumn { column });
        }
    }

    table.records.iter().map(entry_from_record).collect()
}

fn entry_from_record(record: &Record) -> Result<Entry> {
    let module = record.get(COLUMN_MODULE).unwrap_or_default();
    let raw_status = record.get(COLUMN_STATUS).unwrap_or_default();

    let status = raw_status
        .parse::<Status>()
        .map_err(|unknown| TrackingError::InvalidStatus {
            line: record.line,
            value: unknown.0,
        })?;

    Ok(Entry {
        line: record.line,
        module: module.to_string(),
        status,
    })
}

/// Parses and validates CSV text in one step.
///
/// # Errors
///
/// Any error from [`parse_table`] or [`entries`].
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    entries(&parse_table(content)?)
}
