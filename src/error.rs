//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected generation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("no character class selected")]
    NoCharacterClass,
    #[error("password length must be at least 1")]
    InvalidLength,
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Batch file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to access batch file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(feature = "async")]
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Batch processing cancelled")]
    Cancelled,
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
