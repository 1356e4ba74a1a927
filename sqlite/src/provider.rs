//! Connection acquisition.
//!
//! A [`ConnectionProvider`] hands out a fresh connection per call. Callers
//! own the returned connection and release it by dropping it, which keeps
//! every operation scoped to a single acquire/execute/release sequence.

use std::sync::Arc;

use customer_store_core::ConnectionParameters;
use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Produces a new connection to the store on demand.
///
/// Implementations make a single attempt per call and never retry; the
/// caller decides whether to try again.
pub trait ConnectionProvider: Send + Sync {
    /// Opens a live connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store is unreachable or
    /// rejects the credentials.
    fn get_connection(&self) -> Result<Connection>;
}

impl<P> ConnectionProvider for Arc<P>
where
    P: ConnectionProvider + ?Sized,
{
    fn get_connection(&self) -> Result<Connection> {
        (**self).get_connection()
    }
}

/// Opens SQLite connections from [`ConnectionParameters`].
///
/// Accepted endpoint forms are `sqlite://<path>`, `sqlite:<path>`, a SQLite
/// `file:` URI, or a bare filesystem path. The embedded engine has no notion
/// of principals, so the username and password are carried for the harness
/// and for diagnostics but are not checked by the engine.
///
/// # Examples
///
/// ```no_run
/// use customer_store_core::ConnectionParameters;
/// use customer_store_sqlite::{ConnectionProvider, SqliteConnectionProvider};
///
/// let params = ConnectionParameters::new("sqlite://customers.db", "app", "secret");
/// let provider = SqliteConnectionProvider::new(params).unwrap();
/// let conn = provider.get_connection().unwrap();
/// drop(conn);
/// ```
#[derive(Debug, Clone)]
pub struct SqliteConnectionProvider {
    params: ConnectionParameters,
}

impl SqliteConnectionProvider {
    /// Creates a provider for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the endpoint is empty or names a
    /// private in-memory database.
    pub fn new(params: ConnectionParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ConnectionParameters {
        &self.params
    }
}

impl ConnectionProvider for SqliteConnectionProvider {
    fn get_connection(&self) -> Result<Connection> {
        let endpoint = self.params.endpoint();
        let target = self.params.target();
        debug!(endpoint, username = self.params.username(), "acquiring connection");

        let conn = Connection::open(target).map_err(|e| StoreError::connection(endpoint, e))?;

        // Opening is lazy; touch the header so an unreadable or non-database
        // file fails here instead of at the first statement.
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|e| StoreError::connection(endpoint, e))?;

        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_for(endpoint: &str) -> SqliteConnectionProvider {
        SqliteConnectionProvider::new(ConnectionParameters::new(endpoint, "test", "test")).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let err = SqliteConnectionProvider::new(ConnectionParameters::new("", "", "")).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));

        for endpoint in [":memory:", "sqlite::memory:", "sqlite://", "file::memory:"] {
            let err = SqliteConnectionProvider::new(ConnectionParameters::new(endpoint, "", ""))
                .unwrap_err();
            assert!(matches!(err, StoreError::Config(_)), "{endpoint}: {err}");
        }
    }

    #[test]
    fn test_get_connection_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.db");
        let provider = provider_for(&format!("sqlite://{}", path.display()));

        let conn = provider.get_connection().unwrap();
        conn.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
        drop(conn);

        assert!(path.exists());
    }

    #[test]
    fn test_each_call_returns_a_new_connection() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider_for(dir.path().join("customers.db").to_str().unwrap());

        let first = provider.get_connection().unwrap();
        let second = provider.get_connection().unwrap();
        first.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
        first.execute("INSERT INTO t (x) VALUES (1)", []).unwrap();

        let seen: i64 = second
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_missing_directory_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("customers.db");
        let provider = provider_for(path.to_str().unwrap());

        let err = provider.get_connection().unwrap_err();
        assert!(err.is_connection(), "unexpected error: {err}");
    }

    #[test]
    fn test_non_database_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "this is plainly not a sqlite database, just some text").unwrap();
        let provider = provider_for(path.to_str().unwrap());

        let err = provider.get_connection().unwrap_err();
        assert!(err.is_connection(), "unexpected error: {err}");
    }

    #[test]
    fn test_arc_provider_delegates() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(provider_for(dir.path().join("c.db").to_str().unwrap()));
        assert!(provider.get_connection().is_ok());
    }
}
