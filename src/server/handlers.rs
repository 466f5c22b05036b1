//! HTTP handlers for customers and orders

use crate::core::dto::{CreateCustomerRequest, CreateOrderRequest, OrderSummary};
use crate::core::entity::Customer;
use crate::core::error::Result;
use crate::core::service::{CustomerService, OrderService};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{Value, json};

/// Shared state for the API routes
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub orders: OrderService,
}

/// `POST /api/customers`, returns the assigned identifier
pub async fn create_customer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<i64>> {
    let Json(req) = payload?;
    let id = state.customers.create(req).await?;
    Ok(Json(id))
}

/// `GET /api/customers/{id}`
pub async fn get_customer(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>> {
    let Path(id) = id?;
    Ok(Json(state.customers.get(id).await?))
}

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderSummary>> {
    let Json(req) = payload?;
    Ok(Json(state.orders.create(req).await?))
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderSummary>> {
    let Path(id) = id?;
    Ok(Json(state.orders.get(id).await?))
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "order-tracking"
    }))
}
