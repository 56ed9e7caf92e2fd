//! Error types for model-monitoring crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitoringError {
    #[error(
        "Unsupported value in skew detection config. `data_format` must be one of tf-record, csv, or jsonl (got `{0}`)"
    )]
    UnsupportedDataFormat(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MonitoringError>;
