use std::fs;
use std::path::Path;

use crate::error::{Result, TrackingError};

/// Read the tracking file at `path`.
///
/// Existence is checked before the read so a missing file is reported as
/// [`TrackingError::InputNotFound`] rather than a generic I/O failure.
pub fn load_tracking_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(TrackingError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| TrackingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded tracking file");
    Ok(content)
}
