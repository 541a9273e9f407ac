//! Service info and health handlers

use axum::response::Json;
use serde::Serialize;

/// Routes advertised by `GET /`
pub const ENDPOINTS: [&str; 5] = [
    "GET /authors",
    "GET /authors/:id",
    "GET /authors/:id/sales",
    "POST /withdrawals",
    "GET /authors/:id/withdrawals",
];

/// Root info payload
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Human-readable banner
    pub message: String,
    /// Available routes
    pub endpoints: Vec<String>,
}

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
}

/// GET / - Service banner and endpoint list
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "BookLeaf API is running".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(info) = root().await;
        assert_eq!(info.message, "BookLeaf API is running");
        assert_eq!(info.endpoints.len(), 5);
        assert_eq!(info.endpoints[3], "POST /withdrawals");
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "healthy");
        assert!(!health.version.is_empty());
    }
}
