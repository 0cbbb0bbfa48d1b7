//! Axum router: maps URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    admin::reload_index,
    genes::rank_genes,
    health::health,
    tools::{invoke_tool, list_tools},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/api/health",       get(health))
        .route("/api/genes/rank",   post(rank_genes))
        .route("/api/admin/reload", post(reload_index))
        .route("/api/tools",        get(list_tools))
        .route("/api/tools/{name}", post(invoke_tool))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
