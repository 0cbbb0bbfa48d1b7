//! Tool: rank candidate genes for a list of HPO term ids.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use phenorank_ranker::IndexStore;
use serde_json::Value;

use super::PhenorankTool;
use crate::contract::{self, RankGenesParams};

pub struct RankGenesTool {
    store: Arc<IndexStore>,
}

impl RankGenesTool {
    pub fn new(store: Arc<IndexStore>) -> Self { Self { store } }
}

#[async_trait]
impl PhenorankTool for RankGenesTool {
    fn name(&self) -> &str { "rank_genes" }

    fn description(&self) -> &str {
        "Rank candidate causal genes for a set of HPO phenotype ids (HP:nnnnnnn). \
         Each gene scores the sum of 1/(1+n) over matched terms, where n is the number \
         of genes linked to the term, so specific phenotypes count more than generic ones. \
         Returns genes with score, supporting HPO ids, and Ensembl/UCSC/NCBI links."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "hpo_ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1,
                    "description": "HPO term ids, e.g. [\"HP:0001250\"]"
                },
                "top_k": {
                    "type": "integer",
                    "minimum": contract::MIN_TOP_K,
                    "maximum": contract::MAX_TOP_K,
                    "default": phenorank_ranker::DEFAULT_TOP_K,
                    "description": "Maximum number of candidates to return."
                }
            },
            "required": ["hpo_ids"]
        })
    }

    async fn invoke(&self, params: Value) -> Result<Value> {
        let params = RankGenesParams::from_value(&params)?;

        tracing::info!(
            tool = "rank_genes",
            terms = params.hpo_ids.len(),
            top_k = params.top_k,
            "Ranking candidate genes"
        );

        let response = contract::rank_genes(&self.store, &params);
        tracing::debug!(tool = "rank_genes", candidates = response.candidates.len(), "Ranking done");
        Ok(serde_json::to_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ValidationError;
    use phenorank_ranker::loader::parse_association_table;
    use phenorank_test_utils::TWO_TERM_TABLE;
    use serde_json::json;

    fn tool() -> RankGenesTool {
        let index = parse_association_table(TWO_TERM_TABLE).0;
        RankGenesTool::new(Arc::new(IndexStore::with_index("unused", index)))
    }

    #[tokio::test]
    async fn test_invoke_ranks() {
        let out = tool().invoke(json!({ "hpo_ids": ["HP:0000001"] })).await.unwrap();
        let genes: Vec<&str> = out["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["gene"].as_str().unwrap())
            .collect();
        assert_eq!(genes, ["GENEA", "GENEB"]);
        assert_eq!(out["candidates"][0]["score"], 0.333333);
    }

    #[tokio::test]
    async fn test_invoke_respects_top_k() {
        let out = tool()
            .invoke(json!({ "hpo_ids": ["HP:0000002"], "top_k": 1 }))
            .await
            .unwrap();
        assert_eq!(out["candidates"].as_array().unwrap().len(), 1);
        assert_eq!(out["candidates"][0]["gene"], "GENEB");
        assert_eq!(out["candidates"][0]["score"], 0.5);
    }

    #[tokio::test]
    async fn test_invoke_surfaces_validation_error() {
        let err = tool().invoke(json!({ "hpo_ids": [], "top_k": 5 })).await.unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::EmptyHpoIds));
    }

    #[test]
    fn test_schema_requires_hpo_ids() {
        let schema = tool().parameters_schema();
        let req = schema["required"].as_array().unwrap();
        assert!(req.iter().any(|v| v == "hpo_ids"));
        assert_eq!(schema["properties"]["top_k"]["maximum"], 100);
    }
}
