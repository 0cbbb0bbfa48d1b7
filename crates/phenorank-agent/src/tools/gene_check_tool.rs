//! Tool: check a gene guess against a phenopacket's diagnosis.
//!
//! Only the yes/no answer leaves the tool. The ground-truth genes stay
//! private, so an evaluation loop can grade guesses without leaking the
//! diagnosis back to the model.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use super::PhenorankTool;
use crate::contract::ValidationError;

pub struct CheckGeneGuessTool {
    phenopacket_dir: PathBuf,
}

impl CheckGeneGuessTool {
    pub fn new(phenopacket_dir: PathBuf) -> Self { Self { phenopacket_dir } }

    /// Resolve `requested` against the phenopacket directory. The canonical
    /// result must stay inside that directory.
    async fn resolve(&self, requested: &str) -> Result<PathBuf> {
        let root = tokio::fs::canonicalize(&self.phenopacket_dir)
            .await
            .with_context(|| format!("Phenopacket directory {} unavailable", self.phenopacket_dir.display()))?;
        let path = tokio::fs::canonicalize(root.join(requested))
            .await
            .with_context(|| format!("Failed to resolve phenopacket {requested}"))?;
        if !path.starts_with(&root) {
            anyhow::bail!("Phenopacket {requested} is outside {}", root.display());
        }
        Ok(path)
    }
}

/// Diagnosed gene symbols of a phenopacket, uppercased.
pub fn truth_gene_symbols(phenopacket: &Value) -> BTreeSet<String> {
    let mut genes = BTreeSet::new();
    let interpretations = phenopacket["interpretations"].as_array().into_iter().flatten();
    for interpretation in interpretations {
        let calls = interpretation["diagnosis"]["genomicInterpretations"]
            .as_array()
            .into_iter()
            .flatten();
        for call in calls {
            let symbol = call["variantInterpretation"]["variationDescriptor"]["geneContext"]["symbol"]
                .as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty());
            if let Some(symbol) = symbol {
                genes.insert(symbol.to_uppercase());
            }
        }
    }
    genes
}

/// True if any guess names a diagnosed gene (case-insensitive).
pub fn any_guess_matches<S: AsRef<str>>(guesses: &[S], truth: &BTreeSet<String>) -> bool {
    guesses
        .iter()
        .any(|g| truth.contains(&g.as_ref().trim().to_uppercase()))
}

async fn read_phenopacket(path: &Path) -> Result<Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read phenopacket {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Phenopacket {} is not valid JSON", path.display()))
}

#[async_trait]
impl PhenorankTool for CheckGeneGuessTool {
    fn name(&self) -> &str { "check_gene_guess" }

    fn description(&self) -> &str {
        "Check whether any guessed gene symbol matches the diagnosed gene of a phenopacket. \
         Answers only \"Yes\" or \"No\"."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "phenopacket_path": {
                    "type": "string",
                    "description": "Phenopacket JSON file, relative to the configured phenopacket directory."
                },
                "guessed_genes": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["phenopacket_path", "guessed_genes"]
        })
    }

    async fn invoke(&self, params: Value) -> Result<Value> {
        let path = params["phenopacket_path"]
            .as_str()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ValidationError::Malformed("phenopacket_path must be a string".to_string()))?;
        let guesses: Vec<&str> = params["guessed_genes"]
            .as_array()
            .ok_or_else(|| ValidationError::Malformed("guessed_genes must be an array".to_string()))?
            .iter()
            .filter_map(Value::as_str)
            .collect();

        let phenopacket = match self.resolve(path).await {
            Ok(path) => read_phenopacket(&path).await,
            Err(e) => Err(e),
        };
        let truth = match phenopacket {
            Ok(phenopacket) => truth_gene_symbols(&phenopacket),
            Err(e) => {
                tracing::warn!(tool = "check_gene_guess", error = %format!("{e:#}"), "Phenopacket unavailable");
                BTreeSet::new()
            }
        };
        let hit = any_guess_matches(&guesses, &truth);
        tracing::info!(
            tool = "check_gene_guess",
            guesses = guesses.len(),
            diagnosed = truth.len(),
            hit,
            "Checked gene guess"
        );

        Ok(serde_json::json!({ "answer": if hit { "Yes" } else { "No" } }))
    }

    fn output_data_class(&self) -> &str { "CONFIDENTIAL" }
}
