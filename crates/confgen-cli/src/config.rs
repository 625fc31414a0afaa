//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees a validated
//! `Substitution`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--marker`, `--replacement`, `--no-color`; applied at the call-site)
//! 2. Environment variables (`CONFGEN_SUBSTITUTION__MARKER`, ...)
//! 3. Config file (`--config FILE`, else the platform config path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use confgen_core::{
    domain::{DEFAULT_MARKER, DEFAULT_REPLACEMENT, Substitution},
    error::ConfgenError,
};

use crate::cli::{OutputFormat, SubstitutionArgs};
use crate::error::{CliError, CliResult};

/// File name used by `confgen init --local` and as the last-resort location.
pub const LOCAL_CONFIG_FILE: &str = ".confgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Marker and replacement tokens.
    pub substitution: SubstitutionConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    pub marker: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            substitution: SubstitutionConfig {
                marker: DEFAULT_MARKER.into(),
                replacement: DEFAULT_REPLACEMENT.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("CONFGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.confgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "confgen", "confgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path `init` writes to.
    pub fn init_path(local: bool) -> PathBuf {
        if local {
            Path::new(LOCAL_CONFIG_FILE).to_path_buf()
        } else {
            Self::config_path()
        }
    }

    /// Build the substitution rule, letting CLI flags win over config.
    pub fn substitution(&self, overrides: &SubstitutionArgs) -> CliResult<Substitution> {
        let marker = overrides
            .marker
            .as_deref()
            .unwrap_or(&self.substitution.marker);
        let replacement = overrides
            .replacement
            .as_deref()
            .unwrap_or(&self.substitution.replacement);

        Substitution::new(marker, replacement)
            .map_err(|e| CliError::Core(ConfgenError::from(e)))
    }
}
