//! phenorank-web: HTTP API for Phenorank.
//!
//! Serves gene ranking, index administration and the tool registry over
//! JSON. See [`router::build_router`] for the route table.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
