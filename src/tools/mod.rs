//! Tool system: trait, registry and the graph's tool-dispatch node.
//!
//! The agent is bound to exactly two research tools:
//! - `tech_trends_tool` - trending technology keywords for a period and category
//! - `tech_sources_tool` - sources discussing one keyword

mod backend;
mod node;
mod sources;
mod trends;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::ToolsConfig;
use crate::llm::{FunctionSchema, ToolSchema};

pub use backend::{Period, ResearchBackend};
pub use node::ToolNode;
pub use sources::TechSourcesTool;
pub use trends::TechTrendsTool;

/// A callable tool exposed to the model.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the tool's arguments.
    fn parameters_schema(&self) -> Value;

    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Name and description of a registered tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Ordered set of tools, looked up by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two research tools, backed by the configured research API.
    pub fn research(config: &ToolsConfig) -> anyhow::Result<Self> {
        let backend = Arc::new(ResearchBackend::new(config.clone())?);
        let mut registry = Self::new();
        registry.register(Arc::new(TechTrendsTool::new(Arc::clone(&backend))));
        registry.register(Arc::new(TechSourcesTool::new(backend)));
        Ok(registry)
    }

    /// Register a tool. A tool with the same name is replaced in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.iter()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect()
    }

    /// Schemas in the function-calling format the model expects.
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        self.iter()
            .map(|t| ToolSchema {
                schema_type: "function".to_string(),
                function: FunctionSchema {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters_schema(),
                },
            })
            .collect()
    }

    pub async fn execute(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tracing::debug!("Executing tool {} with args {}", name, args);
        Ok(tool.execute(args).await?)
    }
}
