//! The agent node: one model call per graph step.

use std::sync::Arc;

use super::model::ModelProvider;
use super::prompt::system_prompt;
use crate::graph::{AgentState, RunConfig, StateUpdate};
use crate::llm::{ChatMessage, ChatResponse, LlmError};

/// Characters of the underlying error kept in the fallback message.
const ERROR_PREVIEW_CHARS: usize = 100;

/// Calls the tool-bound model with the research system prompt.
#[derive(Clone)]
pub struct AgentNode {
    model: Arc<ModelProvider>,
}

impl AgentNode {
    pub fn new(model: Arc<ModelProvider>) -> Self {
        Self { model }
    }

    /// Run one agent step over the conversation.
    ///
    /// Always yields exactly one assistant message. A failed model call is
    /// reported as an assistant message rather than an error, and an empty
    /// completion is retried once with the retry's result returned as-is.
    pub async fn call_model(&self, state: &AgentState, _config: &RunConfig) -> StateUpdate {
        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.push(ChatMessage::system(system_prompt()));
        messages.extend(state.messages.iter().cloned());

        let message = match self.invoke_with_retry(&messages).await {
            Ok(response) => response.into_message(),
            Err(e) => {
                tracing::error!("Model invocation failed: {}", e);
                error_message(&e)
            }
        };

        StateUpdate::message(message)
    }

    async fn invoke_with_retry(&self, messages: &[ChatMessage]) -> Result<ChatResponse, LlmError> {
        let model = self.model.get();

        let response = model.invoke(messages).await?;
        tracing::debug!(
            "Model returned response: tool_calls={}, has_content={}, finish_reason={:?}, usage={:?}",
            response.tool_calls.as_ref().map(Vec::len).unwrap_or(0),
            response.content.is_some(),
            response.finish_reason,
            response.usage
        );
        if !response.is_empty() {
            return Ok(response);
        }

        tracing::warn!("Model returned an empty response, trying again");
        model.invoke(messages).await
    }
}

fn error_message(error: &LlmError) -> ChatMessage {
    let detail: String = error.to_string().chars().take(ERROR_PREVIEW_CHARS).collect();
    ChatMessage::assistant(format!(
        "I encountered an error while processing your request. Let me try a different approach. Error: {}",
        detail
    ))
}
