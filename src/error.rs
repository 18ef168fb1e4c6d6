//! Error types for the trainer
//!
//! The drill core never fails: generation degrades to a fallback problem and
//! rendering degrades to the bare numeral. Only the outer surfaces (config,
//! CLI parsing, terminal I/O) produce errors.

use std::path::PathBuf;

/// Errors raised outside the drill core
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },
    #[error("unknown operator {0:?} (expected one of + - * /)")]
    UnknownOperator(String),
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    ConfigInvalid(String),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
