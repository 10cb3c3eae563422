// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::cached_repository::CachedFluxRepository;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::swpc_repository::SwpcRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, index};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solar_telemetry=debug,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repositories (infrastructure layer, wrapped in a TTL cache so
    // slider changes re-window cached data instead of refetching)
    let upstream = Arc::new(SwpcRepository::new(
        config.upstream.url.clone(),
        Duration::from_secs(config.upstream.timeout_secs),
    )?);
    let repository = Arc::new(CachedFluxRepository::new(
        upstream,
        Duration::from_secs(config.cache.ttl_secs),
    ));

    // Create service (application layer)
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting solar-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
