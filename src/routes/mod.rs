use crate::errors::ApiError;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod greeting;
pub mod health;

/// Build the application router with all routes and middleware.
pub fn router() -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(greeting::greeting))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Any unmatched path or method.
async fn not_found() -> ApiError {
    ApiError::NotFound
}
