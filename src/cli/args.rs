//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ColorChoice;

/// transcheck - translation progress report
///
/// Reads the source-mapping CSV and prints completion by status and module,
/// followed by suggested next steps.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tracking CSV (default: docs/matrix/react-source-mapping.csv)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// TODO document shown at the end of the report
    #[arg(long, value_name = "PATH")]
    pub todo: Option<PathBuf>,

    /// Directory that relative paths resolve against (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (default: <config dir>/transcheck/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to use colors (overrides the config file)
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
