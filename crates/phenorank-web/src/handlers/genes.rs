//! Gene ranking endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use phenorank_agent::contract::{self, RankGenesParams, RankGenesResponse};
use phenorank_common::ApiError;
use serde_json::Value;

use crate::state::SharedState;

/// POST /api/genes/rank
///
/// Takes the raw body as JSON so that validation messages come from the
/// tool contract rather than from the extractor.
pub async fn rank_genes(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RankGenesResponse>, ApiError> {
    let Json(body) = body?;
    let params = RankGenesParams::from_value(&body)?;
    tracing::debug!(terms = params.hpo_ids.len(), top_k = params.top_k, "Rank request");
    Ok(Json(contract::rank_genes(&state.store, &params)))
}
