//! Server module for the order-tracking HTTP API
//!
//! `ServerBuilder` wires the stores into services and exposes:
//! - Customer and order routes under `/api`
//! - Health routes (`/health`, `/healthz`)

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
