//! Shared application state for the web server.

use std::sync::Arc;

use phenorank_agent::tools::{build_default_registry, ToolRegistry};
use phenorank_ranker::IndexStore;

use crate::config::Config;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub store: Arc<IndexStore>,
    pub tools: ToolRegistry,
}

impl AppState {
    /// Wire the tool registry onto `store`.
    pub fn new(config: Config, store: Arc<IndexStore>) -> Self {
        let tools = build_default_registry(Arc::clone(&store), config.data.phenopacket_dir.clone());
        Self { config, store, tools }
    }

    /// Create the store for the configured association file and try to load it.
    /// A failed load is logged and the server starts on an empty index.
    pub fn bootstrap(config: Config) -> Self {
        let store = IndexStore::new(config.data.association_file.clone());
        match store.reload() {
            Ok(summary) => tracing::info!(
                terms = summary.stats.terms,
                genes = summary.stats.genes,
                skipped = summary.report.lines_skipped,
                "Association index ready"
            ),
            Err(e) => tracing::error!(
                error = %e,
                "Failed to load association file, serving an empty index until reload"
            ),
        }
        Self::new(config, Arc::new(store))
    }
}

pub type SharedState = Arc<AppState>;
