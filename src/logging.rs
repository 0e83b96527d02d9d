//! Logging configuration and initialization.

use tracing::{debug, trace};

/// Initialize tracing for the given `-v` count.
///
/// Diagnostics go to standard error so they never mix with the report.
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .try_init();

    debug!("transcheck started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
