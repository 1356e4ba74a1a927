//! SQL for the `customers` table.
//!
//! The table is created with `CREATE TABLE IF NOT EXISTS`, so bootstrapping
//! against a database that already holds a matching table is a no-op.
//!
//! # Table structure
//!
//! - `id` — caller-assigned 64-bit identifier, primary key
//! - `name` — customer name, never null

/// Creates the `customers` table unless it already exists.
pub(crate) const CREATE_CUSTOMERS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id BIGINT NOT NULL,
    name VARCHAR NOT NULL,
    PRIMARY KEY (id)
)
"#;

/// Inserts one customer; `?1` binds the id and `?2` the name.
pub(crate) const INSERT_CUSTOMER_SQL: &str = "INSERT INTO customers (id, name) VALUES (?1, ?2)";

/// Selects every customer in storage order.
pub(crate) const SELECT_CUSTOMERS_SQL: &str = "SELECT id, name FROM customers";
