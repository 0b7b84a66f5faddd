//! Project API Gateway Library
//!
//! HTTP surface of the workspace project controller: session checks,
//! request validation and the `{status, message, data}` envelope in front
//! of the project services.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod session;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use common::AppResult;
use project_service_lib::ProjectServices;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::session::SessionTokens;
use crate::state::AppState;

/// Build the application router backed by in-memory project services.
pub fn app(config: GatewayConfig) -> AppResult<Router> {
    config.validate()?;

    let services = ProjectServices::in_memory(config.project.clone());
    let tokens = Arc::new(SessionTokens::new(&config.jwt));
    let state = AppState::new(services.projects, services.framework, tokens, config);

    Ok(create_router(state))
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.service.addr().parse()?;
    let base_path = config.project_base_path();
    let app = app(config)?;

    info!("Gateway listening on {}", addr);
    info!("Project routes mounted at {}", base_path);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
