//! Branch decision after each agent step.

use std::fmt;

use serde::Serialize;

use super::AgentState;

/// Where the graph goes after the agent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// The last message requested tools: run them, then call the agent again.
    Continue,
    /// Nothing left to execute.
    End,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Continue => "continue",
            Route::End => "end",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Continue` iff the last message carries at least one tool call.
pub fn should_continue(state: &AgentState) -> Route {
    match state.last_message() {
        Some(message) if !message.requested_tool_calls().is_empty() => Route::Continue,
        _ => Route::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, FunctionCall, Role, ToolCall};

    fn assistant_with_calls(calls: Option<Vec<ToolCall>>) -> ChatMessage {
        ChatMessage {
            role: Role::Assistant,
            content: None,
            tool_calls: calls,
            tool_call_id: None,
        }
    }

    fn trends_call() -> ToolCall {
        ToolCall {
            id: "call_1".to_string(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: "tech_trends_tool".to_string(),
                arguments: r#"{"period":"weekly","category":"ai"}"#.to_string(),
            },
        }
    }

    #[test]
    fn tool_calls_route_to_continue() {
        let state = AgentState::new(vec![
            ChatMessage::user("what's hot in AI?"),
            assistant_with_calls(Some(vec![trends_call()])),
        ]);
        assert_eq!(should_continue(&state), Route::Continue);
        assert_eq!(should_continue(&state).to_string(), "continue");
    }

    #[test]
    fn empty_tool_calls_route_to_end() {
        let state = AgentState::new(vec![assistant_with_calls(Some(vec![]))]);
        assert_eq!(should_continue(&state), Route::End);
    }

    #[test]
    fn absent_tool_calls_route_to_end() {
        let state = AgentState::new(vec![ChatMessage::assistant("Here is the summary.")]);
        assert_eq!(should_continue(&state), Route::End);
        assert_eq!(should_continue(&state).to_string(), "end");
    }

    #[test]
    fn only_the_last_message_counts() {
        let state = AgentState::new(vec![
            assistant_with_calls(Some(vec![trends_call()])),
            ChatMessage::tool("call_1", "[]"),
        ]);
        assert_eq!(should_continue(&state), Route::End);
    }

    #[test]
    fn empty_state_routes_to_end() {
        assert_eq!(should_continue(&AgentState::default()), Route::End);
    }

    #[test]
    fn route_serializes_as_token() {
        assert_eq!(serde_json::to_value(Route::Continue).unwrap(), "continue");
    }
}
