//! Error types for model-monitoring-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
