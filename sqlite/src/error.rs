//! Error types for store operations.
//!
//! Failures are split by category so callers can branch on them:
//! [`StoreError::Connection`] when the store cannot be reached and
//! [`StoreError::Persistence`] when a statement fails once connected.

use customer_store_core::ConfigError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors that can occur during customer store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is unreachable or rejected the credentials.
    #[error("connection error ({endpoint}): {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Statement execution failure, including constraint violations.
    #[error("persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Connection parameters were rejected before any connection attempt.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    pub(crate) fn connection(endpoint: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Returns `true` if the store could not be reached.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Returns `true` if a statement failed after the connection was acquired.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Returns `true` for a persistence failure caused by a constraint,
    /// such as inserting a duplicate customer id.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Persistence(err) => err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation),
            _ => false,
        }
    }
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
