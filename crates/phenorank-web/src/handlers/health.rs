use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::SharedState;

/// GET /api/health
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "ok": true, "index": state.store.stats() }))
}
