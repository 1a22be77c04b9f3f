//! Error types for engine construction and configuration.
//!
//! Inference itself is total and never produces one of these.

use std::path::PathBuf;

/// Errors that can occur while building an engine or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The sampling grid cannot be built from the given bounds.
    #[error("invalid sampling grid: {detail}")]
    InvalidGrid {
        /// Description of the validation failure.
        detail: String,
    },

    /// A label name did not match any label of the variable.
    #[error("unknown {variable} label: '{name}'")]
    UnknownLabel {
        /// The linguistic variable that was searched.
        variable: &'static str,
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
