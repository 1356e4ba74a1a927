//! Error types for connection configuration.

use thiserror::Error;

/// Errors that can occur while loading or validating [`ConnectionParameters`](crate::ConnectionParameters).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingVariable(String),

    /// The endpoint cannot be used to reach a shared store.
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
