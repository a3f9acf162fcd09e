//! # oasmock - OpenAPI Mock Generator
//!
//! oasmock reads an OpenAPI document and produces a random, schema-shaped
//! value for every documented response, so clients can be exercised without a
//! real backend.
//!
//! ## Features
//!
//! - **Schema-driven values**: strings, enums, `date-time`, integers (`int64`),
//!   numbers, booleans, arrays (`minItems`/`maxItems`) and objects
//! - **`$ref` resolution**: component schemas are expanded, reference cycles
//!   terminate with `null`
//! - **Lenient loading**: malformed schemas degrade to `null` instead of failing
//!   the whole document
//! - **Injectable randomness**: replay fixed sequences for exact assertions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oasmock::adapters::document::DocumentLoader;
//! use oasmock::adapters::mock_generator::MockGenerator;
//! use oasmock::adapters::random::EntropySource;
//!
//! fn main() -> anyhow::Result<()> {
//!     let document = DocumentLoader::load("openapi.yaml".as_ref())?;
//!     let mocks = MockGenerator::default().generate_all(&document, &mut EntropySource::new());
//!     println!("{}", serde_json::to_string_pretty(&mocks)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema, document and mock value types
//! - **Adapters**: document loading, reference resolution, value generation,
//!   HTTP handlers
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::mock_handler::{self, ApiState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings, read on every request
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(settings: Arc<RwLock<crate::config::Settings>>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let mock_router = Router::new()
        .route("/mock-generator", get(mock_handler::generate_mocks))
        .with_state(ApiState { settings });

    health_router.merge(mock_router).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
