//! # Tech Research Agent
//!
//! A tool-calling research agent for technology trends.
//!
//! This library provides:
//! - The agent node: research system prompt + memoized, tool-bound model
//! - The routing predicate deciding between running tools and ending the turn
//! - The two research tools and the node that dispatches their calls
//! - A small graph runner and an HTTP API around it
//!
//! ## Architecture
//!
//! The graph follows the "tools in a loop" pattern:
//! 1. The agent node calls the model with the system prompt and conversation
//! 2. If the reply requests tools, the tool node runs them and appends results
//! 3. Control returns to the agent until a reply requests no tools
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tech_research_agent::{agent::{AgentNode, ModelProvider}, graph::*, tools::*, Config};
//!
//! let config = Config::from_env()?;
//! let registry = ToolRegistry::research(&config.tools)?;
//! let agent = AgentNode::new(Arc::new(ModelProvider::shared(config.clone(), registry.clone())));
//! let tools = ToolNode::new(registry);
//! let workflow = ResearchWorkflow::new(agent, tools);
//! let state = workflow
//!     .run(AgentState::from_query("What is trending in AI this week?"), &RunConfig::default())
//!     .await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod graph;
pub mod llm;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::Config;
