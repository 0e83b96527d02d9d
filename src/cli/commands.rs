//! Report command: load, parse, aggregate, render, print.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use super::args::{Args, OutputFormat};
use super::report::{self, RenderOptions};
use crate::analysis::{aggregate, suggest};
use crate::config::Config;
use crate::constants;
use crate::error::TrackingError;
use crate::tracking::{load_tracking_file, parse_entries};

/// Effective settings after merging flags, config file, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute (root-joined) tracking CSV path.
    pub csv_path: PathBuf,
    /// Absolute (root-joined) TODO document path.
    pub todo_path: PathBuf,
    pub max_new_modules: usize,
    pub color: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge `args` over `config`. Relative paths are joined to `root`.
    #[must_use]
    pub fn resolve(args: &Args, config: Config, root: &Path, stdout_is_tty: bool) -> Self {
        let csv = args.csv.clone().unwrap_or(config.csv_path);
        let todo = args.todo.clone().unwrap_or(config.todo_path);
        let color = args.color.unwrap_or(config.color);

        Self {
            csv_path: root.join(csv),
            todo_path: root.join(todo),
            max_new_modules: config.max_new_modules,
            color: color.enabled(stdout_is_tty) && args.format == OutputFormat::Text,
            format: args.format,
        }
    }
}

/// Entry point for the binary: resolve settings and print the report.
///
/// # Errors
///
/// Fails if the config cannot be loaded, the tracking file is missing or
/// invalid, or standard output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let cwd = std::env::current_dir().wrap_err("cannot determine current directory")?;
    let root = match &args.root {
        Some(root) => cwd.join(root),
        None => cwd.clone(),
    };

    let stdout_is_tty = crossterm::tty::IsTty::is_tty(&io::stdout());
    let settings = Settings::resolve(args, config, &root, stdout_is_tty);
    tracing::debug!(
        version = constants::APP_VERSION,
        csv = %settings.csv_path.display(),
        todo = %settings.todo_path.display(),
        "resolved settings"
    );

    let output = build_report(&settings, &cwd)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .wrap_err("failed to write report")?;
    Ok(())
}

/// Produce the full report text for `settings`.
///
/// `cwd` is only used to shorten the TODO path for display.
///
/// # Errors
///
/// A missing tracking file is returned as-is; anything that goes wrong
/// afterwards, including the read itself, is wrapped as an analysis failure.
pub fn build_report(settings: &Settings, cwd: &Path) -> Result<String> {
    let content = match load_tracking_file(&settings.csv_path) {
        Err(err @ TrackingError::InputNotFound { .. }) => return Err(err.into()),
        other => other.wrap_err(constants::ERR_ANALYSIS_FAILED)?,
    };

    let entries = parse_entries(&content).wrap_err(constants::ERR_ANALYSIS_FAILED)?;
    let analysis = aggregate(&entries);
    let steps = suggest(&analysis, settings.max_new_modules);
    let todo = display_path(&settings.todo_path, cwd);

    match settings.format {
        OutputFormat::Text => Ok(report::render_text(
            &analysis,
            &steps,
            &todo,
            RenderOptions {
                color: settings.color,
            },
        )),
        OutputFormat::Json => {
            let mut json = report::render_json(&analysis, &steps, &todo)
                .wrap_err(constants::ERR_ANALYSIS_FAILED)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// `path` relative to `cwd` when one can be computed.
#[must_use]
pub fn display_path(path: &Path, cwd: &Path) -> String {
    pathdiff::diff_paths(path, cwd)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use std::fs;

    fn settings_for(dir: &Path) -> Settings {
        Settings::resolve(&Args::default(), Config::default(), dir, false)
    }

    fn write_csv(dir: &Path, content: &str) {
        let path = dir.join(constants::DEFAULT_CSV_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = settings_for(Path::new("/repo"));
        assert_eq!(
            settings.csv_path,
            PathBuf::from("/repo/docs/matrix/react-source-mapping.csv")
        );
        assert_eq!(
            settings.todo_path,
            PathBuf::from("/repo/docs/matrix/react-translation-todo.md")
        );
        assert_eq!(settings.max_new_modules, 3);
        assert!(!settings.color);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let args = Args {
            csv: Some(PathBuf::from("flag.csv")),
            color: Some(ColorChoice::Always),
            ..Args::default()
        };
        let config = Config {
            csv_path: PathBuf::from("config.csv"),
            todo_path: PathBuf::from("/abs/todo.md"),
            color: ColorChoice::Never,
            ..Config::default()
        };
        let settings = Settings::resolve(&args, config, Path::new("/repo"), false);
        assert_eq!(settings.csv_path, PathBuf::from("/repo/flag.csv"));
        assert_eq!(settings.todo_path, PathBuf::from("/abs/todo.md"));
        assert!(settings.color);
    }

    #[test]
    fn test_resolve_json_never_colored() {
        let args = Args {
            format: OutputFormat::Json,
            color: Some(ColorChoice::Always),
            ..Args::default()
        };
        let settings = Settings::resolve(&args, Config::default(), Path::new("/repo"), true);
        assert!(!settings.color);
    }

    #[test]
    fn test_build_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_report(&settings_for(dir.path()), dir.path()).unwrap_err();
        let tracking = err.downcast_ref::<TrackingError>().unwrap();
        assert!(matches!(tracking, TrackingError::InputNotFound { .. }));
    }

    #[test]
    fn test_build_report_invalid_status_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "module_category,status\ncore,finished\n");
        let err = build_report(&settings_for(dir.path()), dir.path()).unwrap_err();
        assert_eq!(err.to_string(), constants::ERR_ANALYSIS_FAILED);
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert!(chain[1].contains("\"finished\""));
        assert!(chain[1].contains("line 2"));
    }

    #[test]
    fn test_build_report_read_failure_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::DEFAULT_CSV_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let err = build_report(&settings_for(dir.path()), dir.path()).unwrap_err();
        assert_eq!(err.to_string(), constants::ERR_ANALYSIS_FAILED);
        let tracking = err.downcast_ref::<TrackingError>().unwrap();
        assert!(matches!(tracking, TrackingError::Read { .. }));
    }

    #[test]
    fn test_build_report_text() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "module_category,status\nmoduleA,complete\nmoduleA,in-progress\nmoduleB,not-started\n",
        );
        let out = build_report(&settings_for(dir.path()), dir.path()).unwrap();
        assert!(out.contains("✅ Complete: 1/3 (33%)"));
        assert!(out.contains("\n   docs/matrix/react-translation-todo.md\n"));
    }

    #[test]
    fn test_build_report_json() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "module_category,status\ncore,complete\n");
        let mut settings = settings_for(dir.path());
        settings.format = OutputFormat::Json;
        let out = build_report(&settings, dir.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 1);
    }

    #[test]
    fn test_display_path_relative() {
        assert_eq!(
            display_path(Path::new("/repo/docs/todo.md"), Path::new("/repo/scripts")),
            "../docs/todo.md"
        );
        assert_eq!(display_path(Path::new("/repo"), Path::new("/repo")), "/repo");
    }
}
