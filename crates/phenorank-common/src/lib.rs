//! phenorank-common: Shared identifiers, errors and boundary schemas used across all Phenorank crates.

pub mod error;
pub mod entities;
pub mod phenotype;

// Re-export commonly used types
pub use entities::{GeneSymbol, PhenotypeTerm};
pub use error::{ApiError, PhenorankError, Result};
