use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

mod display_config;
mod logs_config;

pub use display_config::DisplayConfig;
pub use logs_config::LogsConfig;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogsConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Looks for `-c <file>` or `--config <file>` after the program name.
pub fn parse_config_path<I>(args: I) -> Result<Option<PathBuf>, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    args.next();
    while let Some(arg) = args.next() {
        if arg == "-c" || arg == "--config" {
            return match args.next() {
                Some(path) => Ok(Some(PathBuf::from(path))),
                None => Err(ConfigError::MissingPath { flag: arg }),
            };
        }
    }
    Ok(None)
}

/// Loads the configuration named on the command line, or the defaults when none is given.
pub fn load<I>(args: I) -> anyhow::Result<Config>
where
    I: IntoIterator<Item = String>,
{
    let Some(path) = parse_config_path(args)? else {
        return Ok(Config::default());
    };
    if !path.is_file() {
        return Err(ConfigError::NotFound { path }.into());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(Config::from_toml(&path, &content)?)
}
