//! Runs the agent/tools loop until the routing predicate says `end`.

use thiserror::Error;

use super::{should_continue, AgentState, Route, RunConfig};
use crate::agent::AgentNode;
use crate::tools::ToolNode;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Recursion limit of {0} reached without hitting a stop condition")]
    RecursionLimit(usize),

    #[error("Input state has no messages")]
    EmptyInput,
}

/// The compiled research graph: `agent` and `tools` joined by [`should_continue`].
#[derive(Clone)]
pub struct ResearchWorkflow {
    agent: AgentNode,
    tools: ToolNode,
}

impl ResearchWorkflow {
    pub fn new(agent: AgentNode, tools: ToolNode) -> Self {
        Self { agent, tools }
    }

    /// Drive the graph from `state` to completion and return the final state.
    pub async fn run(
        &self,
        mut state: AgentState,
        config: &RunConfig,
    ) -> Result<AgentState, GraphError> {
        if state.messages.is_empty() {
            return Err(GraphError::EmptyInput);
        }

        for step in 0..config.recursion_limit {
            tracing::debug!("Run {} agent step {}", config.run_id, step + 1);

            let update = self.agent.call_model(&state, config).await;
            state.apply(update);

            match should_continue(&state) {
                Route::End => {
                    tracing::info!(
                        "Run {} finished after {} agent steps",
                        config.run_id,
                        step + 1
                    );
                    return Ok(state);
                }
                Route::Continue => {
                    let update = self.tools.invoke(&state).await;
                    state.apply(update);
                }
            }
        }

        Err(GraphError::RecursionLimit(config.recursion_limit))
    }
}
