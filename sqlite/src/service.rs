//! Create and list operations for customers.
//!
//! [`CustomerService`] bootstraps the `customers` table when it is
//! constructed, then exposes exactly two operations. Each operation acquires
//! its own connection from the provider, runs one statement, and releases the
//! connection before returning, on success and on error alike.
//!
//! # Example
//!
//! ```no_run
//! use customer_store_core::{ConnectionParameters, Customer};
//! use customer_store_sqlite::CustomerService;
//!
//! let params = ConnectionParameters::new("sqlite://customers.db", "app", "secret");
//! let service = CustomerService::new(params).unwrap();
//!
//! service.create_customer(&Customer::new(1, "George").unwrap()).unwrap();
//! service.create_customer(&Customer::new(2, "John").unwrap()).unwrap();
//!
//! let customers = service.get_all_customers().unwrap();
//! assert_eq!(customers.len(), 2);
//! ```

use customer_store_core::{ConnectionParameters, Customer};
use rusqlite::types::Type;
use rusqlite::{Row, params};
use tracing::{debug, info};

use crate::error::Result;
use crate::provider::{ConnectionProvider, SqliteConnectionProvider};
use crate::schema::{CREATE_CUSTOMERS_TABLE_SQL, INSERT_CUSTOMER_SQL, SELECT_CUSTOMERS_SQL};

/// Data access for the `customers` table.
///
/// The service holds no mutable state; it can be shared across threads
/// whenever its provider can.
#[derive(Debug)]
pub struct CustomerService<P = SqliteConnectionProvider> {
    provider: P,
}

impl CustomerService<SqliteConnectionProvider> {
    /// Connects with the given parameters and bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`](crate::StoreError::Config) for unusable
    /// parameters, [`StoreError::Connection`](crate::StoreError::Connection)
    /// if the store cannot be reached, or
    /// [`StoreError::Persistence`](crate::StoreError::Persistence) if the
    /// table cannot be created.
    pub fn new(params: ConnectionParameters) -> Result<Self> {
        Self::with_provider(SqliteConnectionProvider::new(params)?)
    }
}

impl<P: ConnectionProvider> CustomerService<P> {
    /// Wraps an existing provider and bootstraps the schema.
    ///
    /// Bootstrap is idempotent, so constructing several services against
    /// the same store is safe.
    pub fn with_provider(provider: P) -> Result<Self> {
        let service = Self { provider };
        service.create_customers_table_if_not_exists()?;
        Ok(service)
    }

    /// Inserts a customer.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if a customer with the same id already
    /// exists (see [`StoreError::is_constraint_violation`](crate::StoreError::is_constraint_violation)),
    /// or a connection error if the store cannot be reached.
    pub fn create_customer(&self, customer: &Customer) -> Result<()> {
        let conn = self.provider.get_connection()?;
        debug!(id = customer.id(), "inserting customer");
        conn.execute(INSERT_CUSTOMER_SQL, params![customer.id(), customer.name()])?;
        Ok(())
    }

    /// Loads every customer.
    ///
    /// Rows come back in whatever order the engine returns them; no order is
    /// guaranteed. All rows are read before the connection is released.
    /// Returns an empty vector if the table is empty.
    pub fn get_all_customers(&self) -> Result<Vec<Customer>> {
        let conn = self.provider.get_connection()?;
        let mut stmt = conn.prepare(SELECT_CUSTOMERS_SQL)?;
        let customers = stmt
            .query_map([], row_to_customer)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(count = customers.len(), "loaded customers");
        Ok(customers)
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn create_customers_table_if_not_exists(&self) -> Result<()> {
        let conn = self.provider.get_connection()?;
        conn.execute_batch(CREATE_CUSTOMERS_TABLE_SQL)?;
        info!("customers table ready");
        Ok(())
    }
}

fn row_to_customer(row: &Row<'_>) -> rusqlite::Result<Customer> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    Customer::new(id, name)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))
}
