//! Published index snapshot.
//!
//! The store owns the currently published [`AssociationIndex`] behind an
//! `Arc`. Readers clone the `Arc` and rank against it; a reload builds a
//! complete new index off to the side and then swaps the pointer. The lock
//! is held only for the clone or the assignment, never while parsing.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use phenorank_common::Result;
use serde::Serialize;
use tracing::info;

use crate::index::{AssociationIndex, IndexStats};
use crate::loader::{load_association_file, LoadReport};
use crate::scorer::{rank_genes, GeneHit};

/// Outcome of a (re)load.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReloadSummary {
    pub stats: IndexStats,
    pub report: LoadReport,
}

pub struct IndexStore {
    source: PathBuf,
    current: RwLock<Arc<AssociationIndex>>,
}

impl IndexStore {
    /// A store for `source` that starts out empty. Call [`reload`](Self::reload) to populate it.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            current: RwLock::new(Arc::new(AssociationIndex::empty())),
        }
    }

    /// A store serving a prebuilt index.
    pub fn with_index(source: impl Into<PathBuf>, index: AssociationIndex) -> Self {
        Self {
            source: source.into(),
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Create a store and load `source` immediately.
    pub fn open(source: impl Into<PathBuf>) -> Result<(Self, ReloadSummary)> {
        let store = Self::new(source);
        let summary = store.reload()?;
        Ok((store, summary))
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<AssociationIndex> {
        Arc::clone(&self.current.read())
    }

    /// Publish `index`, replacing the previous snapshot wholesale.
    pub fn replace(&self, index: AssociationIndex) {
        *self.current.write() = Arc::new(index);
    }

    /// Re-read the source file and publish the result. On error the
    /// previous snapshot stays in place.
    pub fn reload(&self) -> Result<ReloadSummary> {
        let (index, report) = load_association_file(&self.source)?;
        let stats = index.stats();
        self.replace(index);
        info!(terms = stats.terms, genes = stats.genes, "Association index published");
        Ok(ReloadSummary { stats, report })
    }

    pub fn stats(&self) -> IndexStats {
        self.snapshot().stats()
    }

    /// Rank against the current snapshot.
    pub fn rank<S: AsRef<str>>(&self, query: &[S], top_k: usize) -> Vec<GeneHit> {
        rank_genes(&self.snapshot(), query, top_k)
    }
}

impl std::fmt::Debug for IndexStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexStore")
            .field("source", &self.source)
            .field("stats", &self.stats())
            .finish()
    }
}
