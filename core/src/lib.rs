//! Core types for the customer store.
//!
//! This crate defines the values shared by every storage backend and by the
//! command-line harness:
//!
//! - [`Customer`] — an immutable customer record (`id`, `name`) whose
//!   constructor enforces a non-empty name.
//! - [`ConnectionParameters`] — the endpoint, username and password used to
//!   reach the backing store, loadable from YAML or the environment.
//!
//! # Example
//!
//! ```
//! use customer_store_core::{ConnectionParameters, Customer};
//!
//! let george = Customer::new(1, "George").unwrap();
//! assert_eq!(george.id(), 1);
//! assert_eq!(george.name(), "George");
//!
//! let params = ConnectionParameters::new("sqlite://customers.db", "app", "secret");
//! assert!(params.validate().is_ok());
//! ```

mod config;
mod customer;
mod error;

pub use config::{ConnectionParameters, ENV_DB_PASSWORD, ENV_DB_URL, ENV_DB_USERNAME};
pub use customer::{Customer, ValidationError};
pub use error::{ConfigError, Result};
