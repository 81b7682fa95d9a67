//! Application state and HTTP router construction.
//!
//! Used by the binary and by the HTTP integration tests to build the Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::catalog::CatalogStore;
use crate::graphql::{CatalogSchema, build_schema};

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub schema: CatalogSchema,
}

impl AppState {
    /// Build the schema over `store`
    pub fn new(store: Arc<CatalogStore>) -> Self {
        let schema = build_schema(store.clone());
        Self { store, schema }
    }
}

/// Build the full Axum router: /graphql, health probes and layers.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::health::router())
        .merge(api::graphql::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
