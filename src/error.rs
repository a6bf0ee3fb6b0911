use color_model::ColorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Unknown color model: {0}")]
    UnknownModel(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
