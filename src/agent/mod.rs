//! Agent module - the research agent node.
//!
//! One agent step:
//! 1. Prepend the research system prompt to the conversation
//! 2. Call the memoized, tool-bound model
//! 3. Return the reply for the graph to append; routing decides whether tools run next

mod model;
mod node;
mod prompt;

pub use model::{build_model, shared_model, ModelProvider};
pub use node::AgentNode;
pub use prompt::{build_system_prompt, system_prompt};
