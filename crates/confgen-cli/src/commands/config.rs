//! `confgen config`: inspect configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run a `config` subcommand against the already-loaded configuration.
///
/// `explicit` is the `--config FILE` the configuration was loaded from, if any.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Cannot render configuration as TOML: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Effective configuration:")?;
            output.print(rendered.trim_end())?;
        }
        ConfigCommands::Path => {
            output.print(&active_path(explicit).display().to_string())?;
        }
    }
    Ok(())
}

/// The file settings were read from: `--config` if given, else the default.
fn active_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(AppConfig::config_path, Path::to_path_buf)
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "substitution.marker" => config.substitution.marker.clone(),
        "substitution.replacement" => config.substitution.replacement.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.as_str().to_owned(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}
