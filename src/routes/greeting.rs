use crate::dto::GreetingResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};

/// GET /
/// Response: 200 OK with JSON { message, timestamp, version }
///
/// The timestamp is taken from the wall clock at request time, ISO-8601 with
/// millisecond precision and the UTC `Z` designator.
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello from Node.js Application!",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
    })
}
