//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KOAGEN_` environment variables, `__` between sections
//!    (`KOAGEN_DEFAULTS__VIEW=hbs`)
//! 3. Config file (`--config FILE`, else `config.toml` in the platform
//!    config directory when present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use koagen_core::domain::{FrameworkVersion, ViewEngine};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult, ResultExt};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// View engine name used when no engine flag is given.
    pub view: Option<String>,
    /// `koa1` or `koa2`, used when `--koa1` is absent.
    pub framework: Option<String>,
    /// Add `.gitignore` even without `--git`.
    pub git: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("KOAGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .during(&format!("loading {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.koagen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "koagen", "koagen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".koagen.toml"))
    }

    /// Engine to use when the command line names none.
    pub fn default_view(&self) -> CliResult<ViewEngine> {
        parse_setting("defaults.view", self.defaults.view.as_deref())
    }

    /// Framework to use when `--koa1` is absent.
    pub fn default_framework(&self) -> CliResult<FrameworkVersion> {
        parse_setting("defaults.framework", self.defaults.framework.as_deref())
    }
}

fn parse_setting<T>(key: &str, raw: Option<&str>) -> CliResult<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(T::default()),
        Some(value) => value.parse().map_err(|e: T::Err| CliError::ConfigError {
            message: format!("invalid value '{value}' for {key}"),
            source: Some(Box::new(e)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_jade_on_koa2_without_git() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_view().unwrap(), ViewEngine::Jade);
        assert_eq!(cfg.default_framework().unwrap(), FrameworkVersion::Current);
        assert!(!cfg.defaults.git);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("koagen.toml");
        std::fs::write(
            &file,
            "[defaults]\nview = \"hbs\"\nframework = \"koa1\"\ngit = true\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(cfg.default_view().unwrap(), ViewEngine::Handlebars);
        assert_eq!(cfg.default_framework().unwrap(), FrameworkVersion::Legacy);
        assert!(cfg.defaults.git);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn unknown_view_is_a_config_error() {
        let cfg = AppConfig {
            defaults: Defaults {
                view: Some("pug".into()),
                ..Defaults::default()
            },
            ..AppConfig::default()
        };
        let err = cfg.default_view().unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("pug"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
