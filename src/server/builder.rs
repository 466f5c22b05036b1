//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_api_routes, health_routes};
use crate::core::service::{CustomerService, OrderService};
use crate::core::store::{CustomerStore, OrderStore};
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the order-tracking HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_in_memory_storage()
///     .build()?;
/// ```
pub struct ServerBuilder {
    customer_store: Option<Arc<dyn CustomerStore>>,
    order_store: Option<Arc<dyn OrderStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            customer_store: None,
            order_store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the customer store (required)
    pub fn with_customer_store(mut self, store: Arc<dyn CustomerStore>) -> Self {
        self.customer_store = Some(store);
        self
    }

    /// Set the order store (required)
    pub fn with_order_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.order_store = Some(store);
        self
    }

    /// Back both stores with one shared [`InMemoryStore`]
    pub fn with_in_memory_storage(self) -> Self {
        let store = Arc::new(InMemoryStore::new());
        self.with_customer_store(store.clone())
            .with_order_store(store)
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the order API, such as readiness probes
    /// or administrative hooks.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health routes (`/health`, `/healthz`)
    /// - Customer and order routes under `/api`
    /// - Any custom routes
    pub fn build(self) -> Result<Router> {
        let customers = self
            .customer_store
            .ok_or_else(|| anyhow::anyhow!("CustomerStore is required. Call .with_customer_store()"))?;
        let orders = self
            .order_store
            .ok_or_else(|| anyhow::anyhow!("OrderStore is required. Call .with_order_store()"))?;

        let state = AppState {
            customers: CustomerService::new(customers.clone()),
            orders: OrderService::new(customers, orders),
        };

        let mut app = health_routes().merge(build_api_routes(state));
        for routes in self.custom_routes {
            app = app.merge(routes);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
