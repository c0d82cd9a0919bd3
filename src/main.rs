//! book-catalog-gateway server entry point.
//!
//! Loads the catalog and starts the Axum HTTP server.

use tracing_subscriber::EnvFilter;

use book_catalog_gateway::api;
use book_catalog_gateway::app_state::AppState;
use book_catalog_gateway::config::{GatewayConfig, LogFormat};
use book_catalog_gateway::domain::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting book-catalog-gateway");

    // Load catalog
    let catalog = match &config.catalog_path {
        Some(path) => CatalogStore::load(path).await?,
        None => CatalogStore::seeded(),
    };
    tracing::info!(books = catalog.len(), "catalog ready");

    // Build application
    let app_state = AppState::new(catalog, &config)?;
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
