//! HTTP handlers for the API routes.

pub mod admin;
pub mod genes;
pub mod health;
pub mod tools;

use phenorank_agent::ValidationError;
use phenorank_common::{ApiError, PhenorankError};

/// Map a tool failure onto an HTTP error: validation problems are the
/// caller's fault, anything else is ours.
pub(crate) fn tool_error(err: anyhow::Error) -> ApiError {
    if let Some(v) = err.downcast_ref::<ValidationError>() {
        return ApiError::from(v.clone());
    }
    match err.downcast::<PhenorankError>() {
        Ok(e) => ApiError::from(e),
        Err(other) => ApiError::Internal(format!("{other:#}")),
    }
}
