use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhenorankError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid phenotype term: {0}")]
    InvalidTerm(String),

    #[error("Invalid gene symbol: {0:?}")]
    InvalidGeneSymbol(String),

    #[error("Invalid phenotype report: {0}")]
    InvalidPhenotype(String),
}

impl PhenorankError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PhenorankError>;

/// HTTP-facing error. Renders as `{"error": "<message>"}`, plus `"field"`
/// when a specific request field was rejected.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (400).
    BadRequest(String),
    /// A named request field failed validation (400).
    InvalidField { field: &'static str, message: String },
    /// Unknown route parameter such as a tool name (404).
    NotFound(String),
    /// Unexpected server-side failure (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::InvalidField { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Body that is not JSON, or sent without a JSON content type.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PhenorankError> for ApiError {
    fn from(err: PhenorankError) -> Self {
        match err {
            PhenorankError::InvalidTerm(_)
            | PhenorankError::InvalidGeneSymbol(_)
            | PhenorankError::InvalidPhenotype(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
