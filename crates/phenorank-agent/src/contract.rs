//! Request/response contract of the `rank_genes` tool.
//!
//! Callers (the orchestration layer, HTTP clients) send loosely structured
//! JSON. Everything is validated here, before the ranker runs:
//!
//! ```json
//! { "hpo_ids": ["HP:0001250"], "top_k": 10 }
//! ```
//!
//! and the answer is shaped as
//!
//! ```json
//! { "candidates": [ { "gene": "SCN1A", "score": 0.2, "matches": ["HP:0001250"], "links": ["..."] } ] }
//! ```

use phenorank_common::ApiError;
use phenorank_ranker::links::CrossReferences;
use phenorank_ranker::{GeneHit, IndexStore, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const MIN_TOP_K: i64 = 1;
pub const MAX_TOP_K: i64 = 100;

/// Decimal places kept in presented scores.
const SCORE_DECIMALS: i32 = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Provide at least one HPO ID like HP:0001250")]
    EmptyHpoIds,

    #[error("top_k must be an integer, got {0}")]
    TopKNotInteger(String),

    #[error("top_k must be between 1 and 100, got {0}")]
    TopKOutOfRange(i64),

    #[error("min_confidence must be a number between 0 and 1, got {0}")]
    InvalidMinConfidence(String),
}

impl ValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Malformed(_) => "request",
            ValidationError::EmptyHpoIds => "hpo_ids",
            ValidationError::TopKNotInteger(_) | ValidationError::TopKOutOfRange(_) => "top_k",
            ValidationError::InvalidMinConfidence(_) => "min_confidence",
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidField { field: err.field(), message: err.to_string() }
    }
}

#[derive(Deserialize)]
struct RawRankGenesParams {
    hpo_ids: Vec<String>,
    #[serde(default)]
    top_k: Option<Value>,
}

/// Validated `rank_genes` arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankGenesParams {
    pub hpo_ids: Vec<String>,
    pub top_k: usize,
}

impl RankGenesParams {
    /// Validate raw tool-call arguments. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let raw = RawRankGenesParams::deserialize(value)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        if raw.hpo_ids.is_empty() {
            return Err(ValidationError::EmptyHpoIds);
        }
        let top_k = parse_top_k(raw.top_k.as_ref())?;
        Ok(Self { hpo_ids: raw.hpo_ids, top_k })
    }
}

/// Validate an optional JSON `top_k`. Absent or `null` means the default;
/// integral floats such as `5.0` are accepted.
pub fn parse_top_k(value: Option<&Value>) -> Result<usize, ValidationError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_TOP_K),
        Some(Value::Number(n)) => n,
        Some(other) => return Err(ValidationError::TopKNotInteger(other.to_string())),
    };

    let k = match number.as_i64() {
        Some(k) => k,
        None => match number.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
            _ => return Err(ValidationError::TopKNotInteger(number.to_string())),
        },
    };
    check_top_k_range(k)
}

fn check_top_k_range(k: i64) -> Result<usize, ValidationError> {
    if (MIN_TOP_K..=MAX_TOP_K).contains(&k) {
        Ok(k as usize)
    } else {
        Err(ValidationError::TopKOutOfRange(k))
    }
}

/// Presented form of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateView {
    pub gene: String,
    pub score: f64,
    pub matches: Vec<String>,
    pub links: Vec<String>,
}

impl From<GeneHit> for CandidateView {
    fn from(hit: GeneHit) -> Self {
        Self {
            links: CrossReferences::for_gene(&hit.gene).into_vec(),
            gene: hit.gene.to_string(),
            score: round_score(hit.score),
            matches: hit.matches.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankGenesResponse {
    pub candidates: Vec<CandidateView>,
}

/// Round a score for presentation.
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}

/// Run validated params against the current index snapshot.
pub fn rank_genes(store: &IndexStore, params: &RankGenesParams) -> RankGenesResponse {
    let candidates = store
        .rank(params.hpo_ids.as_slice(), params.top_k)
        .into_iter()
        .map(CandidateView::from)
        .collect();
    RankGenesResponse { candidates }
}
