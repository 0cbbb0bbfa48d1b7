//! Inverse term-frequency weighting.
//!
//! A phenotype term linked to many genes (a non-specific sign such as
//! "Seizure") says little about which gene is causal, so each match on it is
//! worth less than a match on a term linked to only one or two genes:
//!
//! ```text
//! w(t) = 1 / (1 + |genes(t)|)
//! ```

use std::collections::HashMap;

use phenorank_common::PhenotypeTerm;

/// Weight of a term associated with `gene_count` genes.
pub fn inverse_term_frequency(gene_count: usize) -> f64 {
    1.0 / (1.0 + gene_count as f64)
}

/// Number of associated genes per indexed term.
/// Derived once from an [`AssociationIndex`](crate::index::AssociationIndex); never edited afterwards.
#[derive(Debug, Clone, Default)]
pub struct TermWeightTable {
    counts: HashMap<PhenotypeTerm, usize>,
}

impl TermWeightTable {
    pub(crate) fn from_counts(counts: HashMap<PhenotypeTerm, usize>) -> Self {
        Self { counts }
    }

    /// Genes associated with `term`; 0 for terms not in the index.
    pub fn gene_count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Per-match weight of `term`. Unindexed terms weigh 0.
    pub fn weight(&self, term: &str) -> f64 {
        match self.counts.get(term) {
            Some(&n) => inverse_term_frequency(n),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TermWeightTable {
        let mut counts = HashMap::new();
        counts.insert(PhenotypeTerm::parse("HP:0000001").unwrap(), 2);
        counts.insert(PhenotypeTerm::parse("HP:0000002").unwrap(), 1);
        TermWeightTable::from_counts(counts)
    }

    #[test]
    fn test_inverse_term_frequency_values() {
        assert!((inverse_term_frequency(1) - 0.5).abs() < 1e-12);
        assert!((inverse_term_frequency(2) - 1.0 / 3.0).abs() < 1e-12);
        assert!((inverse_term_frequency(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_specific_terms_weigh_more() {
        for n in 1..50 {
            assert!(inverse_term_frequency(n) > inverse_term_frequency(n + 1));
        }
    }

    #[test]
    fn test_table_lookup() {
        let t = table();
        assert_eq!(t.gene_count("HP:0000001"), 2);
        assert!((t.weight("HP:0000002") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_term_weighs_zero() {
        let t = table();
        assert_eq!(t.gene_count("HP:9999999"), 0);
        assert_eq!(t.weight("HP:9999999"), 0.0);
    }
}
