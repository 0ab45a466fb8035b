//! Router, shared state and server startup.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::types::{HealthResponse, ResearchRequest, ResearchResponse};
use crate::agent::{AgentNode, ModelProvider};
use crate::config::Config;
use crate::graph::{should_continue, AgentState, GraphError, ResearchWorkflow, RunConfig};
use crate::tools::{ToolNode, ToolRegistry};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub workflow: ResearchWorkflow,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let tools = ToolRegistry::research(&config.tools)?;
        for tool in tools.list_tools() {
            tracing::info!("Registered tool {}: {}", tool.name, tool.description);
        }
        if !config.tools.is_enabled() {
            tracing::warn!("TECH_TRENDS_API_URL is not set; research tools will report errors");
        }

        let model = Arc::new(ModelProvider::shared(config.clone(), tools.clone()));
        let workflow = ResearchWorkflow::new(AgentNode::new(model), ToolNode::new(tools));

        Ok(Self { config, workflow })
    }
}

/// Build the router over an existing state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/research", post(research))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn research(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, (StatusCode, String)> {
    let messages = req.into_messages();
    if messages.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Provide a non-empty query or messages".to_string(),
        ));
    }

    let run = RunConfig::new(state.config.recursion_limit);
    tracing::info!("Starting research run {}", run.run_id);

    let final_state = state
        .workflow
        .run(AgentState::new(messages), &run)
        .await
        .map_err(|e| match e {
            GraphError::EmptyInput => (StatusCode::BAD_REQUEST, e.to_string()),
            GraphError::RecursionLimit(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(Json(ResearchResponse {
        run_id: run.run_id,
        route: should_continue(&final_state),
        messages: final_state.messages,
    }))
}
