//! Memoized construction of the tool-bound model.

use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::llm::{BoundModel, OpenRouterClient};
use crate::tools::ToolRegistry;

static SHARED_MODEL: OnceLock<Arc<BoundModel>> = OnceLock::new();

/// Build the research model: the configured LLM bound to both research tools.
pub fn build_model(config: &Config, tools: &ToolRegistry) -> BoundModel {
    let client = Arc::new(OpenRouterClient::new(
        config.api_key.clone(),
        config.llm_base_url.clone(),
    ));
    BoundModel::new(client, config.default_model.clone()).bind_tools(tools.get_tool_schemas())
}

/// The process-wide model handle.
///
/// The first call builds it from `config` and `tools`; every later call
/// returns the same instance and ignores its arguments.
pub fn shared_model(config: &Config, tools: &ToolRegistry) -> Arc<BoundModel> {
    SHARED_MODEL
        .get_or_init(|| {
            let model = build_model(config, tools);
            tracing::info!(
                "Initialized model {} with tools {:?}",
                model.model(),
                model.tool_names()
            );
            Arc::new(model)
        })
        .clone()
}

type ModelFactory = Box<dyn Fn() -> Arc<BoundModel> + Send + Sync>;

/// Lazily builds a model once and hands out the cached handle.
pub struct ModelProvider {
    factory: ModelFactory,
    cell: OnceLock<Arc<BoundModel>>,
}

impl ModelProvider {
    pub fn new(factory: impl Fn() -> BoundModel + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(move || Arc::new(factory())),
            cell: OnceLock::new(),
        }
    }

    /// Provider backed by the process-wide [`shared_model`].
    pub fn shared(config: Config, tools: ToolRegistry) -> Self {
        Self {
            factory: Box::new(move || shared_model(&config, &tools)),
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Arc<BoundModel> {
        self.cell.get_or_init(|| (self.factory)()).clone()
    }
}
