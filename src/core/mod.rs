//! Core module containing the domain model, store traits and services

pub mod dto;
pub mod entity;
pub mod error;
pub mod service;
pub mod store;
pub mod validation;

pub use dto::{
    CreateCustomerRequest, CreateOrderItemRequest, CreateOrderRequest, OrderItemSummary,
    OrderSummary,
};
pub use entity::{
    Customer, DEFAULT_CURRENCY, NewCustomer, NewOrder, NewOrderItem, Order, OrderItem, OrderStatus,
};
pub use error::{
    AppError, ConstraintViolation, ErrorResponse, NotFoundError, Result, StorageError,
    ValidationError,
};
pub use service::{CustomerService, OrderService};
pub use store::{CustomerStore, OrderStore};
