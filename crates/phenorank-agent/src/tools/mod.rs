//! Tools exposed to the orchestration layer, and the registry that names them.

pub mod gene_check_tool;
pub mod phenotype_tool;
pub mod rank_genes_tool;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use phenorank_ranker::IndexStore;
use serde_json::Value;

/// A named, schema-described operation. `invoke` validates its own params.
#[async_trait]
pub trait PhenorankTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;

    /// Execute the tool. Validation failures surface as
    /// [`ValidationError`](crate::contract::ValidationError) inside the `anyhow` error.
    async fn invoke(&self, params: Value) -> Result<Value>;

    fn requires_approval(&self) -> bool { false }

    /// `"CONFIDENTIAL"` for tools that read patient-level data.
    fn output_data_class(&self) -> &str { "PUBLIC" }
}

/// Tools by name. Built once at startup.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn PhenorankTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: BTreeMap::new() }
    }

    /// Register a tool. Panics if the name is already registered.
    pub fn register<T: PhenorankTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        assert!(
            !self.tools.contains_key(&name),
            "Duplicate tool name: {name}"
        );
        self.tools.insert(name, Arc::new(tool));
    }

    /// Invoke a registered tool by name.
    pub async fn invoke(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self.tools.get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {name}"))?;

        tracing::info!(
            tool = name,
            requires_approval = tool.requires_approval(),
            data_class = tool.output_data_class(),
            "Invoking tool"
        );

        tool.invoke(params).await
    }

    /// All registered tools as a JSON manifest, ordered by name.
    pub fn manifest(&self) -> Value {
        let tools: Vec<Value> = self.tools.values().map(|t| {
            serde_json::json!({
                "name": t.name(),
                "description": t.description(),
                "parameters": t.parameters_schema(),
                "requires_approval": t.requires_approval(),
                "output_data_class": t.output_data_class(),
            })
        }).collect();
        serde_json::json!({ "tools": tools })
    }

    pub fn len(&self) -> usize { self.tools.len() }

    pub fn is_empty(&self) -> bool { self.tools.is_empty() }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PhenorankTool>> {
        self.tools.get(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self { Self::new() }
}

pub fn build_default_registry(store: Arc<IndexStore>, phenopacket_dir: PathBuf) -> ToolRegistry {
    let mut reg = ToolRegistry::new();
    reg.register(rank_genes_tool::RankGenesTool::new(store.clone()));
    reg.register(phenotype_tool::RankFromPhenotypeTool::new(store));
    reg.register(gene_check_tool::CheckGeneGuessTool::new(phenopacket_dir));
    tracing::info!("ToolRegistry ready with {} tools", reg.len());
    reg
}
