use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum DummylogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Failed to create file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write message: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to bind HTTP server to {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error("HTTP server force exit! Failed to shutdown gracefully within {0:?}")]
    ShutdownTimeout(std::time::Duration),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled,
}

impl DummylogError {
    /// Cancellation is the expected way out of both modes and is not a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DummylogError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, DummylogError>;
