//! HTTP API for running research conversations.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `POST /api/research` - Run the research graph over a query or message history

mod routes;
pub mod types;

pub use routes::{app, serve, AppState};
