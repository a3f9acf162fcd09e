//! REST handler serving generated mocks for the configured document

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::adapters::document::DocumentLoader;
use crate::adapters::mock_generator::MockGenerator;
use crate::adapters::random::EntropySource;
use crate::config::Settings;
use crate::domain::MockResult;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
}

#[derive(Debug, Serialize)]
pub struct MocksResponse {
    pub mocks: Vec<MockResult>,
}

/// `GET /mock-generator`
///
/// The document is read on every request so edits show up without a restart.
pub async fn generate_mocks(State(state): State<ApiState>) -> Response {
    let (path, scope) = {
        let settings = state.settings.read().await;
        (settings.document.path.clone(), settings.generator.reference_scope)
    };

    let document = match DocumentLoader::load_async(&path).await {
        Ok(document) => document,
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            return (
                e.status_code(),
                Json(json!({ "error": format!("Could not generate mocks: {}", e) })),
            )
                .into_response();
        }
    };

    let mut random = EntropySource::new();
    let mocks = MockGenerator::new(scope).generate_all(&document, &mut random);
    info!("Serving {} mocks for {}", mocks.len(), path.display());

    (StatusCode::OK, Json(MocksResponse { mocks })).into_response()
}
