//! Fixtures shared by the Phenorank test suites.

use std::io::Write;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

pub use pretty_assertions::assert_eq;

/// `HP:0000001 -> {GENEA, GENEB}`, `HP:0000002 -> {GENEB}`.
pub const TWO_TERM_TABLE: &str = "hpo_id\thpo_name\tncbi_gene_id\tgene_symbol\tdisease_id
HP:0000001\tAll\t1\tGENEA\tOMIM:100001
HP:0000001\tAll\t2\tGENEB\tOMIM:100002
HP:0000002\tAbnormality of body height\t2\tGENEB\tOMIM:100002
";

/// A slightly larger table with non-specific and specific terms.
///
/// * `HP:0001250` (Seizure) maps to four genes
/// * `HP:0002373` (Febrile seizure) maps to two genes
/// * `HP:0001251` (Ataxia) maps to one gene
pub const SEIZURE_TABLE: &str = "hpo_id\thpo_name\tncbi_gene_id\tgene_symbol\tdisease_id
HP:0001250\tSeizure\t6323\tSCN1A\tOMIM:607208
HP:0001250\tSeizure\t6326\tSCN2A\tOMIM:613721
HP:0001250\tSeizure\t2554\tGABRA1\tOMIM:611136
HP:0001250\tSeizure\t6853\tSYN1\tOMIM:300491
HP:0002373\tFebrile seizure\t6323\tSCN1A\tOMIM:604403
HP:0002373\tFebrile seizure\t2554\tGABRA1\tOMIM:611136
HP:0001251\tAtaxia\t6326\tSCN2A\tOMIM:618924
";

/// Write `contents` to `phenotype_to_genes.txt` inside a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_table(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("phenotype_to_genes.txt");
    let mut file = std::fs::File::create(&path).expect("Failed to create table file");
    file.write_all(contents.as_bytes()).expect("Failed to write table file");
    (dir, path)
}

/// A path inside a fresh temp dir that does not exist.
pub fn missing_table() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent").join("phenotype_to_genes.txt");
    (dir, path)
}

/// Minimal phenopacket whose ground-truth genes are `symbols`.
pub fn phenopacket_json(symbols: &[&str]) -> String {
    let interpretations: Vec<Value> = symbols
        .iter()
        .map(|s| {
            json!({
                "diagnosis": {
                    "genomicInterpretations": [{
                        "variantInterpretation": {
                            "variationDescriptor": { "geneContext": { "symbol": s } }
                        }
                    }]
                }
            })
        })
        .collect();
    json!({ "id": "case-1", "interpretations": interpretations }).to_string()
}

/// Assert two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
