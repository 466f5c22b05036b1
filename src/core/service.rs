//! Customer and order services
//!
//! `OrderService` is the only component with behavior beyond storage: it
//! validates requests, computes totals, builds the aggregate for a single
//! store write and maps the stored result to an [`OrderSummary`].

use crate::core::dto::{CreateCustomerRequest, CreateOrderRequest, OrderSummary};
use crate::core::entity::{Customer, NewCustomer, NewOrder, NewOrderItem, OrderStatus};
use crate::core::error::{NotFoundError, Result};
use crate::core::store::{CustomerStore, OrderStore};
use crate::core::validation::{compute_total, normalize_currency, validate_create_order};
use std::sync::Arc;

/// Thin wrapper over the customer store for the API layer
#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Register a customer and return its identifier
    pub async fn create(&self, req: CreateCustomerRequest) -> Result<i64> {
        let customer = self
            .customers
            .create(NewCustomer::new(req.name, req.email))
            .await?;

        tracing::info!(customer_id = customer.id, "customer created");
        Ok(customer.id)
    }

    pub async fn get(&self, id: i64) -> Result<Customer> {
        tracing::debug!(customer_id = id, "fetching customer");
        self.customers
            .get(id)
            .await?
            .ok_or_else(|| NotFoundError::Customer(id).into())
    }
}

#[derive(Clone)]
pub struct OrderService {
    customers: Arc<dyn CustomerStore>,
    orders: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(customers: Arc<dyn CustomerStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { customers, orders }
    }

    /// Create an order with all of its items
    ///
    /// Validation and customer lookup happen before the single store write,
    /// so a failed request persists nothing.
    pub async fn create(&self, req: CreateOrderRequest) -> Result<OrderSummary> {
        let (customer_id, items) = validate_create_order(&req)?;
        let currency = normalize_currency(req.currency.as_deref())?;

        let customer = self
            .customers
            .get(customer_id)
            .await?
            .ok_or(NotFoundError::Customer(customer_id))?;

        let total_cents = compute_total(items)?;

        let new_order = NewOrder {
            customer_id: customer.id,
            status: OrderStatus::Pending,
            total_cents,
            currency,
            items: items
                .iter()
                .map(|it| NewOrderItem {
                    sku: it.sku.clone(),
                    name: it.name.clone(),
                    qty: it.qty,
                    unit_price_cents: it.unit_price_cents,
                })
                .collect(),
        };

        let saved = self.orders.create_with_items(new_order).await?;

        tracing::info!(
            order_id = saved.id,
            customer_id = saved.customer_id,
            item_count = saved.items.len(),
            total_cents = saved.total_cents,
            "order created"
        );

        Ok(OrderSummary::from(&saved))
    }

    /// Read-only lookup of an order by ID
    pub async fn get(&self, id: i64) -> Result<OrderSummary> {
        tracing::debug!(order_id = id, "fetching order");
        let order = self
            .orders
            .get(id)
            .await?
            .ok_or(NotFoundError::Order(id))?;

        Ok(OrderSummary::from(&order))
    }
}
