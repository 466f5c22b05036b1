//! Route table for the REST API

use super::handlers::{
    AppState, create_customer, create_order, get_customer, get_order, health_check,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the API routes
///
/// - POST /api/customers - Register a customer, returns its id
/// - GET /api/customers/{id} - Get a customer
/// - POST /api/orders - Create an order with its items
/// - GET /api/orders/{id} - Get an order summary
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", post(create_customer))
        .route("/api/customers/{id}", get(get_customer))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}
