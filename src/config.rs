//! User configuration loaded from `config.toml`.
//!
//! The default file lives in the per-user config directory
//! (`~/.config/transcheck/config.toml` on Linux). Every key is optional and
//! falls back to the built-in defaults in [`crate::constants`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::{Result, TrackingError};

/// When to style report output with colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when standard output is a terminal.
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl ColorChoice {
    /// Resolve against whether the output stream is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracking CSV; relative paths resolve against the project root.
    pub csv_path: PathBuf,
    /// TODO document shown at the end of the report.
    pub todo_path: PathBuf,
    /// Cap for the "consider starting" list.
    pub max_new_modules: usize,
    /// Color policy.
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(constants::DEFAULT_CSV_PATH),
            todo_path: PathBuf::from(constants::DEFAULT_TODO_PATH),
            max_new_modules: constants::DEFAULT_MAX_NEW_MODULES,
            color: ColorChoice::Auto,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Config`] if the text is not valid config TOML.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| TrackingError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            if required {
                return Err(TrackingError::Config {
                    path,
                    message: "file not found".to_string(),
                });
            }
            tracing::trace!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|e| TrackingError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&text, &path)
    }
}

/// `<config dir>/transcheck/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::APP_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            "max_new_modules = 5\ncolor = \"never\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.max_new_modules, 5);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.csv_path, PathBuf::from(constants::DEFAULT_CSV_PATH));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("csv = \"x.csv\"\n", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, TrackingError::Config { .. }));
    }

    #[test]
    fn test_bad_color_rejected() {
        assert!(Config::from_toml("color = \"sometimes\"\n", Path::new("c.toml")).is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "csv_path = \"tracking.csv\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("tracking.csv"));
    }

    #[test]
    fn test_color_choice_enabled() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
