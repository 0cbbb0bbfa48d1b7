//! phenorank-agent: tool surface for the orchestration layer.
//!
//! [`contract`] validates and shapes `rank_genes` calls; [`tools`] wraps the
//! ranker (and the phenopacket grader) as named, schema-described tools.

pub mod contract;
pub mod tools;

pub use contract::{RankGenesParams, RankGenesResponse, ValidationError};
pub use tools::{build_default_registry, PhenorankTool, ToolRegistry};
