// ============================================================================
// MINIMAL HTTP SERVICE - HEALTH, READINESS, AND GREETING ENDPOINTS
// ============================================================================

// - Liveness and readiness probes for orchestrators
// - Greeting endpoint with request-time timestamp
// - CORS configuration
// - Structured logging
// - Fail-fast startup on bad PORT or bind failure

mod config;
mod dto;
mod errors;
mod routes;

use config::Config;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Build the router
    let app = routes::router();

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET /health - Liveness check");
    info!("  GET /ready  - Readiness check");
    info!("  GET /       - Greeting");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
