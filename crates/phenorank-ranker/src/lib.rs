//! phenorank-ranker: Phenotype-driven candidate gene ranking.
//!
//! Loads a phenotype-to-gene association table into an immutable inverted
//! index, weights each phenotype term by how few genes it points at, and
//! ranks genes by the summed weight of the query terms they match.

pub mod index;
pub mod links;
pub mod loader;
pub mod scorer;
pub mod store;
pub mod weights;

pub use index::{AssociationIndex, IndexStats};
pub use scorer::{rank_genes, GeneHit, DEFAULT_TOP_K};
pub use store::{IndexStore, ReloadSummary};
