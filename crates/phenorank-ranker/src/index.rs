//! Phenotype → gene inverted index.
//!
//! An [`AssociationIndex`] is assembled with an [`AssociationIndexBuilder`] and
//! is immutable once built; reloading means building a new one and publishing
//! it through [`IndexStore`](crate::store::IndexStore).

use std::collections::{BTreeSet, HashMap, HashSet};

use phenorank_common::{GeneSymbol, PhenotypeTerm};
use serde::Serialize;

use crate::weights::TermWeightTable;

/// Summary of an index snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Distinct phenotype terms
    pub terms: usize,
    /// Distinct gene symbols across all terms
    pub genes: usize,
    /// Distinct (term, gene) pairs
    pub associations: usize,
}

#[derive(Debug, Default)]
pub struct AssociationIndex {
    genes_by_term: HashMap<PhenotypeTerm, BTreeSet<GeneSymbol>>,
    weights: TermWeightTable,
    stats: IndexStats,
}

impl AssociationIndex {
    /// An index with no associations. Every query against it matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> AssociationIndexBuilder {
        AssociationIndexBuilder::default()
    }

    /// Genes associated with `term`, if the term is indexed.
    pub fn genes_for(&self, term: &str) -> Option<&BTreeSet<GeneSymbol>> {
        self.genes_by_term.get(term)
    }

    pub fn weights(&self) -> &TermWeightTable {
        &self.weights
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.genes_by_term.is_empty()
    }
}

/// Accumulates (term, gene) pairs; duplicate pairs collapse.
#[derive(Debug, Default)]
pub struct AssociationIndexBuilder {
    genes_by_term: HashMap<PhenotypeTerm, BTreeSet<GeneSymbol>>,
}

impl AssociationIndexBuilder {
    /// Record one association. Returns false if the pair was already present.
    pub fn insert(&mut self, term: PhenotypeTerm, gene: GeneSymbol) -> bool {
        self.genes_by_term.entry(term).or_default().insert(gene)
    }

    /// Convenience for tests and fixtures: validates both sides and records
    /// the pair if both are well formed.
    pub fn with(mut self, term: &str, gene: &str) -> Self {
        if let (Some(t), Some(g)) = (PhenotypeTerm::parse(term), GeneSymbol::parse(gene)) {
            self.insert(t, g);
        }
        self
    }

    /// Freeze the associations and derive the term-frequency table.
    pub fn build(self) -> AssociationIndex {
        let counts: HashMap<PhenotypeTerm, usize> = self
            .genes_by_term
            .iter()
            .map(|(term, genes)| (term.clone(), genes.len()))
            .collect();

        let distinct_genes: HashSet<&GeneSymbol> =
            self.genes_by_term.values().flatten().collect();

        let stats = IndexStats {
            terms: self.genes_by_term.len(),
            genes: distinct_genes.len(),
            associations: counts.values().sum(),
        };

        AssociationIndex {
            weights: TermWeightTable::from_counts(counts),
            genes_by_term: self.genes_by_term,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_term_index() -> AssociationIndex {
        AssociationIndex::builder()
            .with("HP:0000001", "GENEA")
            .with("HP:0000001", "GENEB")
            .with("HP:0000002", "GENEB")
            .build()
    }

    #[test]
    fn test_build_derives_counts() {
        let index = two_term_index();
        assert_eq!(index.weights().gene_count("HP:0000001"), 2);
        assert_eq!(index.weights().gene_count("HP:0000002"), 1);
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let index = AssociationIndex::builder()
            .with("HP:0000001", "GENEA")
            .with("hp:0000001", "genea")
            .with("HP:0000001", " GENEA ")
            .build();
        assert_eq!(index.genes_for("HP:0000001").unwrap().len(), 1);
        assert_eq!(index.weights().gene_count("HP:0000001"), 1);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut builder = AssociationIndex::builder();
        let t = PhenotypeTerm::parse("HP:0000001").unwrap();
        let g = GeneSymbol::parse("GENEA").unwrap();
        assert!(builder.insert(t.clone(), g.clone()));
        assert!(!builder.insert(t, g));
    }

    #[test]
    fn test_stats() {
        let stats = two_term_index().stats();
        assert_eq!(stats, IndexStats { terms: 2, genes: 2, associations: 3 });
    }

    #[test]
    fn test_empty_index() {
        let index = AssociationIndex::empty();
        assert!(index.is_empty());
        assert!(index.genes_for("HP:0000001").is_none());
        assert_eq!(index.stats(), IndexStats::default());
    }

    #[test]
    fn test_invalid_pairs_ignored_by_with() {
        let index = AssociationIndex::builder()
            .with("not-a-term", "GENEA")
            .with("HP:0000001", "")
            .build();
        assert!(index.is_empty());
    }
}
