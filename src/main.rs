//! Caiden Resources Backend
//!
//! A read-only REST backend serving the downloadable-resources catalog with
//! type, tag, audience and free-text filtering.

mod api;
mod catalog;
mod config;
mod errors;
mod filter;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::Catalog;
use config::{Config, LogFormat};
use errors::AppError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!("Starting Caiden Resources Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    match &config.catalog_path {
        Some(path) => tracing::info!("Catalog path: {:?}", path),
        None => tracing::info!("Using embedded catalog"),
    }

    if config.links.preorder_url.is_none() {
        tracing::warn!("No preorder link configured (CAIDEN_PREORDER_URL)");
    }

    let catalog = Arc::new(Catalog::load(config.catalog_path.as_deref())?);
    if catalog.is_empty() {
        tracing::warn!("Catalog contains no resources");
    }

    // Create application state
    let state = AppState {
        catalog,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Public read-only API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Resources
        .route("/resources", get(api::list_resources))
        .route("/resources/{id}", get(api::get_resource))
        // Selector data
        .route("/tags", get(api::list_tags))
        .route("/catalog", get(api::get_catalog_info))
        // Shop and waitlist
        .route("/links", get(api::get_links));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
