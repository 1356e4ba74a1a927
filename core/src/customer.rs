//! The customer record.
//!
//! A [`Customer`] is an immutable value: once constructed its `id` and `name`
//! cannot change. The identifier is assigned by the caller and acts as the
//! primary key in every backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Customer validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Customer name is empty or whitespace-only.
    #[error("customer name cannot be empty")]
    EmptyName,
}

/// A customer identified by a caller-assigned 64-bit id.
///
/// # Examples
///
/// ```
/// use customer_store_core::{Customer, ValidationError};
///
/// let john = Customer::new(2, "John").unwrap();
/// assert_eq!(john.to_string(), "2\tJohn");
///
/// assert_eq!(Customer::new(3, "  "), Err(ValidationError::EmptyName));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCustomer")]
pub struct Customer {
    id: i64,
    name: String,
}

impl Customer {
    /// Creates a customer, rejecting an empty or whitespace-only name.
    pub fn new(id: i64, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self { id, name })
    }

    /// The caller-assigned identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.id, self.name)
    }
}

/// Unchecked wire form; deserialization funnels through [`Customer::new`].
#[derive(Deserialize)]
struct RawCustomer {
    id: i64,
    name: String,
}

impl TryFrom<RawCustomer> for Customer {
    type Error = ValidationError;

    fn try_from(raw: RawCustomer) -> Result<Self, Self::Error> {
        Customer::new(raw.id, raw.name)
    }
}
