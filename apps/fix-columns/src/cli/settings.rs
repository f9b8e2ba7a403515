//! # Settings
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. A TOML file, `fix-columns.toml` in the working directory unless `--config` names one
//! 3. Environment variables prefixed with `FIX_COLUMNS_`, using `__` to descend into
//!    sections (e.g. `FIX_COLUMNS_LOGGER__LEVEL=debug`, `FIX_COLUMNS_OUTPUT__PRETTY=true`,
//!    `FIX_COLUMNS_DISPLAY__NO_ANSI=true`)
//!
//! The default file is optional. A file passed explicitly through `--config` must exist.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use super::logger::LoggerSettings;

pub const DEFAULT_CONFIG_FILE: &str = "fix-columns.toml";
pub const ENVIRONMENT_VARIABLE_PREFIX: &str = "FIX_COLUMNS";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OutputSettings {
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DisplaySettings {
    #[serde(default)]
    pub no_ansi: bool,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("Config file {path} does not exist")]
    MissingFile { path: String },
    #[error("Failed to load settings: {0}")]
    Load(#[from] ConfigError),
}

/// Reads settings from the config file and the environment.
///
/// `config_path` overrides the default file location and makes the file mandatory.
pub fn read_settings(config_path: Option<&Path>) -> Result<Settings, SettingsError> {
    let file = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(SettingsError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            File::from(path).format(FileFormat::Toml).required(true)
        }
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENVIRONMENT_VARIABLE_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}
