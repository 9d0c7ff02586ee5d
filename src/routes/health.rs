use crate::dto::StatusResponse;
use axum::Json;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::healthy())
}

/// GET /ready
/// Response: 200 OK with JSON
pub async fn readiness_check() -> Json<StatusResponse> {
    Json(StatusResponse::ready())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "nodejs");
    }

    #[tokio::test]
    async fn ready_reports_ready() {
        let Json(body) = readiness_check().await;
        assert_eq!(body.status, "ready");
        assert_eq!(body.service, "nodejs");
    }
}
