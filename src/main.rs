//! Server: loads config from env / `.env`, opens the database, mounts health, category and product routes.

use category_api::{app, init_db, load_config, AppState, CategoryStore, PgProductRepository, ProductService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("category_api=info,tower_http=info")),
        )
        .init();

    let config = load_config().inspect_err(|e| tracing::error!(error = %e, "failed to load config"))?;

    let pool = init_db(&config.db_conn)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to initialize database"))?;

    let products = ProductService::new(Arc::new(PgProductRepository::new(pool.clone())));
    let state = AppState::new(CategoryStore::seeded(), products);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
