use anyhow::Result;
use order_tracking::config::{AppConfig, StorageBackend};
use order_tracking::server::ServerBuilder;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_tracking=debug")),
        )
        .with(fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let builder = storage_builder(&config).await?;

    builder.serve(&config.bind_address()).await
}

async fn storage_builder(config: &AppConfig) -> Result<ServerBuilder> {
    match config.storage.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory storage");
            Ok(ServerBuilder::new().with_in_memory_storage())
        }
        StorageBackend::Postgres => postgres_builder(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn postgres_builder(config: &AppConfig) -> Result<ServerBuilder> {
    use order_tracking::storage::{PostgresStore, ensure_schema};
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    let url = config
        .storage
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("storage.database_url is required for postgres"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.storage.max_connections)
        .connect(url)
        .await?;
    ensure_schema(&pool).await?;
    tracing::info!("Using postgres storage");

    let store = Arc::new(PostgresStore::new(pool));
    Ok(ServerBuilder::new()
        .with_customer_store(store.clone())
        .with_order_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_config: &AppConfig) -> Result<ServerBuilder> {
    anyhow::bail!("the postgres backend requires building with the `postgres` feature")
}
