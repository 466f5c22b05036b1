//! In-memory implementation of the customer and order stores
//!
//! Useful for testing and development. All tables sit behind one `RwLock`,
//! so an order and its items are inserted under a single write guard.

use crate::core::entity::{Customer, NewCustomer, NewOrder, Order, OrderItem};
use crate::core::error::{ConstraintViolation, Result, StorageError};
use crate::core::store::{CustomerStore, OrderStore};
use crate::core::validation::{email_key, validate_new_customer};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    customers: BTreeMap<i64, Customer>,
    /// lower-cased email -> customer id
    emails: HashMap<String, i64>,
    orders: BTreeMap<i64, Order>,
    last_customer_id: i64,
    last_order_id: i64,
    last_item_id: i64,
}

/// In-memory customer and order store
///
/// Cloning is cheap and clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| {
            StorageError::Lock {
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| {
            StorageError::Lock {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Number of stored customers
    pub fn customer_count(&self) -> Result<usize> {
        Ok(self.read()?.customers.len())
    }

    /// Number of stored orders
    pub fn order_count(&self) -> Result<usize> {
        Ok(self.read()?.orders.len())
    }

    /// Number of stored order items across all orders
    pub fn item_count(&self) -> Result<usize> {
        Ok(self.read()?.orders.values().map(|o| o.items.len()).sum())
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn create(&self, customer: NewCustomer) -> Result<Customer> {
        let customer = validate_new_customer(&customer)?;
        let key = email_key(&customer.email);

        let mut tables = self.write()?;

        if tables.emails.contains_key(&key) {
            return Err(ConstraintViolation::DuplicateEmail {
                email: customer.email,
            }
            .into());
        }

        tables.last_customer_id += 1;
        let stored = Customer {
            id: tables.last_customer_id,
            name: customer.name,
            email: customer.email,
        };

        tables.emails.insert(key, stored.id);
        tables.customers.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>> {
        let tables = self.read()?;
        Ok(tables.customers.get(&id).cloned())
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn create_with_items(&self, order: NewOrder) -> Result<Order> {
        let mut tables = self.write()?;

        if !tables.customers.contains_key(&order.customer_id) {
            return Err(ConstraintViolation::UnknownCustomer {
                customer_id: order.customer_id,
            }
            .into());
        }

        let now = Utc::now();
        let order_id = tables.last_order_id + 1;
        let first_item_id = tables.last_item_id + 1;

        let items: Vec<OrderItem> = order
            .items
            .into_iter()
            .zip(first_item_id..)
            .map(|(item, id)| OrderItem {
                id,
                order_id,
                sku: item.sku,
                name: item.name,
                qty: item.qty,
                unit_price_cents: item.unit_price_cents,
            })
            .collect();

        let stored = Order {
            id: order_id,
            customer_id: order.customer_id,
            status: order.status,
            total_cents: order.total_cents,
            currency: order.currency,
            created_at: now,
            updated_at: now,
            items,
        };

        tables.last_order_id = order_id;
        tables.last_item_id += stored.items.len() as i64;
        tables.orders.insert(order_id, stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<Order>> {
        let tables = self.read()?;
        Ok(tables.orders.get(&id).cloned())
    }
}
