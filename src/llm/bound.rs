//! A model handle with a fixed tool set bound to every request.

use std::sync::Arc;

use super::{ChatMessage, ChatResponse, LlmClient, LlmError, ToolSchema};

/// An LLM client, a model id and the tool schemas sent with each call.
pub struct BoundModel {
    client: Arc<dyn LlmClient>,
    model: String,
    tools: Vec<ToolSchema>,
}

impl BoundModel {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            tools: Vec::new(),
        }
    }

    /// Bind tool schemas; replaces any previously bound set.
    pub fn bind_tools(mut self, tools: Vec<ToolSchema>) -> Self {
        self.tools = tools;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Names of the bound tools, in binding order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.function.name.as_str()).collect()
    }

    pub async fn invoke(&self, messages: &[ChatMessage]) -> Result<ChatResponse, LlmError> {
        self.client
            .chat_completion(&self.model, messages, Some(self.tools.as_slice()))
            .await
    }
}
