//! Tool: rank genes straight from a phenotype-extraction report.
//!
//! Saves the orchestrator a round trip: it can hand over the extraction
//! service's JSON as-is instead of copying HPO ids into a `rank_genes` call.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use phenorank_common::phenotype::PhenotypeReport;
use phenorank_ranker::IndexStore;
use serde_json::Value;

use super::PhenorankTool;
use crate::contract::{self, parse_top_k, RankGenesParams, RankGenesResponse, ValidationError};

pub struct RankFromPhenotypeTool {
    store: Arc<IndexStore>,
}

impl RankFromPhenotypeTool {
    pub fn new(store: Arc<IndexStore>) -> Self { Self { store } }
}

fn parse_min_confidence(value: Option<&Value>) -> Result<f64, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => match v.as_f64() {
            Some(c) if (0.0..=1.0).contains(&c) => Ok(c),
            _ => Err(ValidationError::InvalidMinConfidence(v.to_string())),
        },
    }
}

#[async_trait]
impl PhenorankTool for RankFromPhenotypeTool {
    fn name(&self) -> &str { "rank_genes_from_phenotype" }

    fn description(&self) -> &str {
        "Rank candidate genes from a phenotype report ({phenotype_text, hpo:[{id,label,confidence}]}) \
         as produced by the phenotype extraction tool. Terms below min_confidence are dropped."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "phenotype": {
                    "type": "object",
                    "properties": {
                        "phenotype_text": { "type": "string", "minLength": 1 },
                        "hpo": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "id": { "type": "string", "pattern": "^HP:\\d{7}$" },
                                    "label": { "type": "string" },
                                    "confidence": { "type": "number", "minimum": 0, "maximum": 1 }
                                },
                                "required": ["id", "label", "confidence"]
                            }
                        }
                    },
                    "required": ["phenotype_text", "hpo"]
                },
                "min_confidence": { "type": "number", "minimum": 0, "maximum": 1, "default": 0 },
                "top_k": {
                    "type": "integer",
                    "minimum": contract::MIN_TOP_K,
                    "maximum": contract::MAX_TOP_K,
                    "default": phenorank_ranker::DEFAULT_TOP_K
                }
            },
            "required": ["phenotype"]
        })
    }

    async fn invoke(&self, params: Value) -> Result<Value> {
        let top_k = parse_top_k(params.get("top_k"))?;
        let min_confidence = parse_min_confidence(params.get("min_confidence"))?;
        let report = PhenotypeReport::from_value(params.get("phenotype").cloned().unwrap_or(Value::Null))?;

        let hpo_ids = report.term_ids(min_confidence);
        tracing::info!(
            tool = "rank_genes_from_phenotype",
            reported = report.hpo.len(),
            kept = hpo_ids.len(),
            min_confidence,
            "Ranking from phenotype report"
        );

        // Nothing confident enough is a no-match, not a validation failure.
        let response = if hpo_ids.is_empty() {
            RankGenesResponse { candidates: vec![] }
        } else {
            contract::rank_genes(&self.store, &RankGenesParams { hpo_ids, top_k })
        };
        Ok(serde_json::to_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenorank_common::PhenorankError;
    use phenorank_ranker::loader::parse_association_table;
    use phenorank_test_utils::SEIZURE_TABLE;
    use serde_json::json;

    fn tool() -> RankFromPhenotypeTool {
        let index = parse_association_table(SEIZURE_TABLE).0;
        RankFromPhenotypeTool::new(Arc::new(IndexStore::with_index("unused", index)))
    }

    fn report() -> Value {
        json!({
            "phenotype_text": "Recurrent febrile seizures with unsteady gait.",
            "hpo": [
                { "id": "HP:0002373", "label": "Febrile seizure", "confidence": 0.9 },
                { "id": "HP:0001251", "label": "Ataxia", "confidence": 0.3 }
            ]
        })
    }

    fn genes(out: &Value) -> Vec<String> {
        out["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["gene"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_ranks_all_reported_terms() {
        let out = tool().invoke(json!({ "phenotype": report() })).await.unwrap();
        // Ataxia (1 gene, w=0.5) lifts SCN2A above the febrile seizure pair (w=1/3).
        assert_eq!(genes(&out), ["SCN2A", "GABRA1", "SCN1A"]);
    }

    #[tokio::test]
    async fn test_min_confidence_drops_terms() {
        let out = tool()
            .invoke(json!({ "phenotype": report(), "min_confidence": 0.5 }))
            .await
            .unwrap();
        assert_eq!(genes(&out), ["GABRA1", "SCN1A"]);
    }

    #[tokio::test]
    async fn test_no_confident_terms_is_empty() {
        let out = tool()
            .invoke(json!({ "phenotype": report(), "min_confidence": 1.0 }))
            .await
            .unwrap();
        assert!(genes(&out).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_report_rejected() {
        let mut bad = report();
        bad["hpo"][0]["id"] = json!("HP:2373");
        let err = tool().invoke(json!({ "phenotype": bad })).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<PhenorankError>(), Some(PhenorankError::InvalidPhenotype(_))));
    }

    #[tokio::test]
    async fn test_missing_report_rejected() {
        assert!(tool().invoke(json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_bad_min_confidence_rejected() {
        let err = tool()
            .invoke(json!({ "phenotype": report(), "min_confidence": 2 }))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidMinConfidence(_))
        ));
    }
}
