//! Graph node that executes the tool calls of the last message.

use serde_json::Value;

use super::ToolRegistry;
use crate::graph::{AgentState, StateUpdate};
use crate::llm::{ChatMessage, ToolCall};

/// Dispatches requested tool calls to a [`ToolRegistry`].
#[derive(Clone)]
pub struct ToolNode {
    tools: ToolRegistry,
}

impl ToolNode {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    /// Run every tool call on the last message, in order.
    ///
    /// Each call yields exactly one tool message; failures become the
    /// message content instead of aborting the run.
    pub async fn invoke(&self, state: &AgentState) -> StateUpdate {
        let calls = state
            .last_message()
            .map(ChatMessage::requested_tool_calls)
            .unwrap_or(&[]);

        let mut messages = Vec::with_capacity(calls.len());
        for call in calls {
            let content = match self.execute_tool_call(call).await {
                Ok(output) => output,
                Err(e) => {
                    tracing::warn!("Tool {} failed: {}", call.function.name, e);
                    format!("Error: {}", e)
                }
            };
            messages.push(ChatMessage::tool(call.id.clone(), content));
        }

        StateUpdate { messages }
    }

    async fn execute_tool_call(&self, call: &ToolCall) -> anyhow::Result<String> {
        let raw = call.function.arguments.trim();
        let args: Value = if raw.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(raw).map_err(|e| {
                anyhow::anyhow!("Invalid arguments for {}: {}", call.function.name, e)
            })?
        };

        Ok(self.tools.execute(&call.function.name, args).await?)
    }
}
