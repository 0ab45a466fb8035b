//! `tech_trends_tool`: trending technology keywords.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Period, ResearchBackend, Tool};

/// Fetch trending keywords for a period and category.
pub struct TechTrendsTool {
    backend: Arc<ResearchBackend>,
}

impl TechTrendsTool {
    pub fn new(backend: Arc<ResearchBackend>) -> Self {
        Self { backend }
    }

    fn query(args: &Value) -> anyhow::Result<Vec<(&'static str, String)>> {
        let period = Period::from_args(args)?;
        let category = args["category"]
            .as_str()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing 'category' argument"))?;

        Ok(vec![
            ("period", period.to_string()),
            ("category", category.to_string()),
        ])
    }
}

#[async_trait]
impl Tool for TechTrendsTool {
    fn name(&self) -> &str {
        "tech_trends_tool"
    }

    fn description(&self) -> &str {
        "Get trending technology keywords for a period and category. Use this first to discover which keywords are worth researching."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "period": {
                    "type": "string",
                    "enum": ["daily", "weekly", "monthly", "quarterly"],
                    "description": "Time window for the trend ranking"
                },
                "category": {
                    "type": "string",
                    "description": "Keyword category, e.g. companies, ai, people, websites, subjects, frameworks, languages, tools, platforms"
                }
            },
            "required": ["period", "category"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = Self::query(&args)?;
        self.backend.get("trends", &query).await
    }
}
