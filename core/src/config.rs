//! Connection parameters for the backing store.
//!
//! The parameters are supplied once, explicitly, before a service is
//! constructed and are never mutated afterwards. They can be built in code,
//! loaded from a YAML file, or read from the environment.
//!
//! # Example YAML
//!
//! ```yaml
//! endpoint: sqlite:///var/lib/customers/customers.db
//! username: app
//! password: secret
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable holding the store endpoint.
pub const ENV_DB_URL: &str = "CUSTOMERS_DB_URL";
/// Environment variable holding the auth principal.
pub const ENV_DB_USERNAME: &str = "CUSTOMERS_DB_USERNAME";
/// Environment variable holding the auth credential.
pub const ENV_DB_PASSWORD: &str = "CUSTOMERS_DB_PASSWORD";

/// Endpoint, username and password used to reach the store.
///
/// The `Debug` output never includes the password.
///
/// # Examples
///
/// ```
/// use customer_store_core::ConnectionParameters;
///
/// let params = ConnectionParameters::new("sqlite://customers.db", "app", "hunter2");
/// assert_eq!(params.endpoint(), "sqlite://customers.db");
/// assert!(!format!("{params:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    endpoint: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl ConnectionParameters {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads the parameters from `CUSTOMERS_DB_URL`, `CUSTOMERS_DB_USERNAME`
    /// and `CUSTOMERS_DB_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] if the endpoint variable is
    /// not set. Username and password default to empty strings.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the parameters from an arbitrary key lookup, using the same
    /// keys as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint =
            lookup(ENV_DB_URL).ok_or_else(|| ConfigError::MissingVariable(ENV_DB_URL.to_string()))?;
        Ok(Self {
            endpoint,
            username: lookup(ENV_DB_USERNAME).unwrap_or_default(),
            password: lookup(ENV_DB_PASSWORD).unwrap_or_default(),
        })
    }

    /// Loads the parameters from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be read,
    /// or [`YamlError`](ConfigError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let params = serde_yaml::from_reader(reader)?;
        Ok(params)
    }

    /// Saves the parameters as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that the endpoint can address a store shared across connections.
    ///
    /// The check runs on the resolved [`target`](Self::target), so scheme
    /// prefixes cannot hide a private database. Rejected: an empty target,
    /// `:memory:`, and `file:` URIs with an empty path, a `:memory:` path, or
    /// `mode=memory`. Every operation opens its own connection, so a private
    /// database would vanish between bootstrap and the first insert.
    pub fn validate(&self) -> Result<()> {
        if is_private_target(self.target()) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        Ok(())
    }

    /// The endpoint with its `sqlite:` or `sqlite://` scheme stripped, ready
    /// to hand to the engine.
    ///
    /// `file:` URIs and bare paths are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use customer_store_core::ConnectionParameters;
    ///
    /// let params = ConnectionParameters::new("sqlite:///tmp/customers.db", "", "");
    /// assert_eq!(params.target(), "/tmp/customers.db");
    /// ```
    pub fn target(&self) -> &str {
        let endpoint = self.endpoint.trim();
        endpoint
            .strip_prefix("sqlite://")
            .or_else(|| endpoint.strip_prefix("sqlite:"))
            .unwrap_or(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Returns `true` if `target` names a database only one connection can see.
fn is_private_target(target: &str) -> bool {
    if target.is_empty() || target == ":memory:" {
        return true;
    }
    let Some(uri) = target.strip_prefix("file:") else {
        return false;
    };
    let uri = uri.split('#').next().unwrap_or_default();
    let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
    path.is_empty()
        || path == ":memory:"
        || query.split('&').any(|pair| pair == "mode=memory")
}

impl std::fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
