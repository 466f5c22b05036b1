//! # Order Tracking
//!
//! An order-management backend: customers register with a unique email,
//! orders are placed for a customer with one or more line items, and the
//! stored order can be looked up with its items and computed total.
//!
//! ## Layout
//!
//! - [`core`]: domain entities, request/response shapes, validation,
//!   store traits and the customer/order services
//! - [`storage`]: in-memory and PostgreSQL store implementations
//! - [`server`]: axum routes, handlers and the [`server::ServerBuilder`]
//! - [`config`]: YAML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_tracking::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_in_memory_storage()
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        Customer, DEFAULT_CURRENCY, NewCustomer, NewOrder, NewOrderItem, Order, OrderItem,
        OrderStatus,
    };

    // === Wire shapes ===
    pub use crate::core::{
        CreateCustomerRequest, CreateOrderItemRequest, CreateOrderRequest, OrderItemSummary,
        OrderSummary,
    };

    // === Errors ===
    pub use crate::core::{
        AppError, ConstraintViolation, ErrorResponse, NotFoundError, StorageError,
        ValidationError,
    };

    // === Stores and services ===
    pub use crate::core::{CustomerService, CustomerStore, OrderService, OrderStore};
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresStore, ensure_schema};

    // === Server ===
    pub use crate::config::{AppConfig, StorageBackend};
    pub use crate::server::{AppState, ServerBuilder};

    // === Re-exports from dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
