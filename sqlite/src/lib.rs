//! SQLite-backed data access for customers.
//!
//! This crate manages exactly one table, `customers`, and exposes exactly
//! two data operations on it through [`CustomerService`]: creating a customer
//! and listing every customer. Connections are obtained from a
//! [`ConnectionProvider`] once per operation and released before the
//! operation returns.
//!
//! # Architecture
//!
//! - **`provider`** — connection acquisition from [`ConnectionParameters`](customer_store_core::ConnectionParameters)
//! - **`schema`** — SQL for the `customers` table
//! - **`service`** — schema bootstrap plus the create/list operations
//!
//! # Quick start
//!
//! ```no_run
//! use customer_store_core::{ConnectionParameters, Customer};
//! use customer_store_sqlite::CustomerService;
//!
//! let params = ConnectionParameters::from_env().unwrap();
//! let service = CustomerService::new(params).unwrap();
//!
//! match service.create_customer(&Customer::new(1, "George").unwrap()) {
//!     Ok(()) => {}
//!     Err(err) if err.is_constraint_violation() => eprintln!("customer 1 already exists"),
//!     Err(err) => eprintln!("insert failed: {err}"),
//! }
//!
//! for customer in service.get_all_customers().unwrap() {
//!     println!("{customer}");
//! }
//! ```
//!
//! # Errors
//!
//! Every fallible call returns [`StoreError`]. Unreachable stores surface as
//! [`StoreError::Connection`]; statement failures, including duplicate ids,
//! surface as [`StoreError::Persistence`]. Nothing is retried.

mod error;
mod provider;
mod schema;
mod service;

pub use error::{Result, StoreError};
pub use provider::{ConnectionProvider, SqliteConnectionProvider};
pub use service::CustomerService;
