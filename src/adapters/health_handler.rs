use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub struct HealthHandler {
    settings: Arc<RwLock<Settings>>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self {
            settings,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - returns 200 once the configured document exists
    pub async fn ready(&self) -> impl IntoResponse {
        let document = self.settings.read().await.document.path.clone();

        if tokio::fs::metadata(&document).await.is_ok_and(|m| m.is_file()) {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "document": document.display().to_string()
            })))
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": format!("Document not found: {}", document.display())
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocumentSettings, GeneratorSettings, ServerSettings};
    use std::path::PathBuf;

    fn handler(document: PathBuf) -> HealthHandler {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            document: DocumentSettings { path: document },
            generator: GeneratorSettings::default(),
        };
        HealthHandler::new(Arc::new(RwLock::new(settings)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handler(PathBuf::from("openapi.yaml")).health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_without_document() {
        let response = handler(PathBuf::from("/no/such/openapi.yaml"))
            .ready()
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_ready_endpoint_with_document() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let response = handler(file.path().to_path_buf()).ready().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let response = handler(PathBuf::from("openapi.yaml")).live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
