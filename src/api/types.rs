//! API request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::Route;
use crate::llm::ChatMessage;

/// Request to run the research graph.
///
/// Either `query` starts a new conversation, or `messages` continues one.
/// When both are given, `query` is appended as the newest user message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchRequest {
    /// The user's research question
    #[serde(default)]
    pub query: Option<String>,

    /// Prior conversation, oldest first
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ResearchRequest {
    /// Conversation to feed the graph.
    pub fn into_messages(self) -> Vec<ChatMessage> {
        let mut messages = self.messages;
        if let Some(query) = self.query.filter(|q| !q.trim().is_empty()) {
            messages.push(ChatMessage::user(query));
        }
        messages
    }
}

/// Result of a research run.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchResponse {
    /// Unique run identifier
    pub run_id: Uuid,

    /// Final routing decision (always `end` for a completed run)
    pub route: Route,

    /// Full conversation, including tool traffic
    pub messages: Vec<ChatMessage>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn query_is_appended_after_history() {
        let request: ResearchRequest = serde_json::from_str(
            r#"{"query": "and for developers?", "messages": [{"role": "user", "content": "AI trends"}]}"#,
        )
        .unwrap();
        let messages = request.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content.as_deref(), Some("and for developers?"));
    }

    #[test]
    fn blank_query_adds_nothing() {
        let request: ResearchRequest = serde_json::from_str(r#"{"query": "  "}"#).unwrap();
        assert!(request.into_messages().is_empty());
    }
}
