//! Administrative endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use phenorank_common::ApiError;
use phenorank_ranker::ReloadSummary;

use crate::state::SharedState;

/// POST /api/admin/reload
///
/// Re-reads the association file and swaps the snapshot.
pub async fn reload_index(
    State(state): State<SharedState>,
) -> Result<Json<ReloadSummary>, ApiError> {
    let store = Arc::clone(&state.store);
    let summary = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| ApiError::Internal(format!("Reload task failed: {e}")))??;
    tracing::info!(
        terms = summary.stats.terms,
        associations = summary.stats.associations,
        "Index reloaded on request"
    );
    Ok(Json(summary))
}
