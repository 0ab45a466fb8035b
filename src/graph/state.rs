//! Conversation state and the updates nodes return.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::llm::ChatMessage;

/// Ordered message history; nodes only ever append to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub messages: Vec<ChatMessage>,
}

impl AgentState {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// A fresh conversation holding one user message.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::user(query)])
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append the messages a node produced.
    pub fn apply(&mut self, update: StateUpdate) {
        self.messages.extend(update.messages);
    }
}

/// Messages a node asks the runner to append.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateUpdate {
    pub messages: Vec<ChatMessage>,
}

impl StateUpdate {
    pub fn message(message: ChatMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

/// Per-run settings passed alongside the state. Opaque to the agent node.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub run_id: Uuid,
    /// Maximum number of agent steps before the run is aborted
    pub recursion_limit: usize,
}

impl RunConfig {
    pub fn new(recursion_limit: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            recursion_limit,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}
