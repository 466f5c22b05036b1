//! Store traits for customers and orders
//!
//! Implementations own identifier and timestamp assignment. The service layer
//! is agnostic to the underlying storage mechanism.

use crate::core::entity::{Customer, NewCustomer, NewOrder, Order};
use crate::core::error::Result;
use async_trait::async_trait;

/// Customer persistence
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Validate and insert a customer, assigning its identifier
    ///
    /// Fails with `ConstraintViolation::DuplicateEmail` when another customer
    /// already holds the email (compared case-insensitively).
    async fn create(&self, customer: NewCustomer) -> Result<Customer>;

    /// Get a customer by ID
    async fn get(&self, id: i64) -> Result<Option<Customer>>;
}

/// Order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Write an order and all of its items in one atomic step
    ///
    /// The returned order carries the assigned order and item identifiers and
    /// the store's timestamps. Either everything is written or nothing is.
    async fn create_with_items(&self, order: NewOrder) -> Result<Order>;

    /// Get an order with its items, in insertion order
    async fn get(&self, id: i64) -> Result<Option<Order>>;
}
