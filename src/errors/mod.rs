use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please specify path string for {flag} argument. Usage: {flag} <config_file>")]
    MissingPath { flag: String },

    #[error("Configuration file not found or invalid, expected file path: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path:?}, please check the TOML syntax")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
