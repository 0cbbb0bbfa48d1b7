//! Candidate gene scoring.
//!
//! For a query of phenotype terms Q, each gene g accumulates
//!
//! ```text
//! S(g) = Σ_{t ∈ Q, g ∈ genes(t)} w(t),   w(t) = 1 / (1 + |genes(t)|)
//! ```
//!
//! and candidates are ordered by S(g) descending, then gene symbol ascending.
//! Q is taken as given: a term repeated in the query contributes once per
//! occurrence.

use std::cmp::Ordering;
use std::collections::HashMap;

use phenorank_common::{GeneSymbol, PhenotypeTerm};
use serde::{Deserialize, Serialize};

use crate::index::AssociationIndex;

/// Result count used when the caller does not ask for one.
pub const DEFAULT_TOP_K: usize = 25;

/// One ranked candidate gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneHit {
    pub gene: GeneSymbol,
    /// Unrounded sum of matched term weights
    pub score: f64,
    /// Distinct query terms that matched, in first-match order
    pub matches: Vec<PhenotypeTerm>,
}

/// Running per-gene aggregate for a single ranking pass.
#[derive(Debug, Default)]
struct GeneCandidate {
    score: f64,
    matches: Vec<PhenotypeTerm>,
}

impl GeneCandidate {
    fn record(&mut self, term: &PhenotypeTerm, weight: f64) {
        self.score += weight;
        if !self.matches.contains(term) {
            self.matches.push(term.clone());
        }
    }
}

/// Normalise raw query strings, keeping only well-formed term ids.
/// Order and repetitions are preserved.
pub fn normalise_query<S: AsRef<str>>(query: &[S]) -> Vec<PhenotypeTerm> {
    query
        .iter()
        .filter_map(|raw| PhenotypeTerm::parse(raw.as_ref()))
        .collect()
}

/// Rank candidate genes for `query` against `index`, returning at most `top_k`.
///
/// Malformed terms and terms absent from the index are ignored; a query with
/// nothing usable returns an empty list.
pub fn rank_genes<S: AsRef<str>>(
    index: &AssociationIndex,
    query: &[S],
    top_k: usize,
) -> Vec<GeneHit> {
    let terms = normalise_query(query);
    if terms.is_empty() {
        return vec![];
    }

    let mut candidates: HashMap<&GeneSymbol, GeneCandidate> = HashMap::new();

    for term in &terms {
        let Some(genes) = index.genes_for(term.as_str()) else {
            continue;
        };
        let weight = index.weights().weight(term.as_str());
        for gene in genes {
            candidates.entry(gene).or_default().record(term, weight);
        }
    }

    let mut hits: Vec<GeneHit> = candidates
        .into_iter()
        .map(|(gene, candidate)| GeneHit {
            gene: gene.clone(),
            score: candidate.score,
            matches: candidate.matches,
        })
        .collect();

    hits.sort_by(compare_hits);
    hits.truncate(top_k);
    hits
}

/// Score descending, then gene symbol ascending.
fn compare_hits(a: &GeneHit, b: &GeneHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.gene.cmp(&b.gene))
}
