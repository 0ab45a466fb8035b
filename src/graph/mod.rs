//! Graph plumbing around the agent node.
//!
//! The research graph has two nodes and one conditional edge:
//! `agent` -> [`should_continue`] -> `continue` -> `tools` -> `agent`
//!                                -> `end`

mod routing;
mod state;
mod workflow;

pub use routing::{should_continue, Route};
pub use state::{AgentState, RunConfig, StateUpdate};
pub use workflow::{GraphError, ResearchWorkflow};
