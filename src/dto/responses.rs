use serde::Serialize;

/// Service identifier reported by the probe endpoints. Kept as "nodejs" so
/// this binary is a drop-in replacement for the deployment it supersedes.
pub const SERVICE_NAME: &str = "nodejs";

/// Body of the liveness (`/health`) and readiness (`/ready`) probes.
///
/// Fields are `&'static str` on purpose: both payloads are fixed, so repeated
/// probes serialize to byte-identical bodies.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl StatusResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }

    pub fn ready() -> Self {
        Self {
            status: "ready",
            service: SERVICE_NAME,
        }
    }
}

/// Body of the greeting endpoint (`/`).
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}
