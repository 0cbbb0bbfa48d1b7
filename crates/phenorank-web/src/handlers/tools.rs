//! Tool manifest and invocation endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use phenorank_common::ApiError;
use serde_json::Value;

use super::tool_error;
use crate::state::SharedState;

/// GET /api/tools
pub async fn list_tools(State(state): State<SharedState>) -> Json<Value> {
    Json(state.tools.manifest())
}

/// POST /api/tools/{name}
pub async fn invoke_tool(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    params: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    if state.tools.get(&name).is_none() {
        return Err(ApiError::NotFound(format!("Unknown tool: {name}")));
    }
    let Json(params) = params?;
    let output = state.tools.invoke(&name, params).await.map_err(tool_error)?;
    Ok(Json(output))
}
