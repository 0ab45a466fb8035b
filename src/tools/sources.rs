//! `tech_sources_tool`: sources discussing a keyword.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Period, ResearchBackend, Tool};

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

/// Find sources (articles, posts, repos) mentioning a keyword.
pub struct TechSourcesTool {
    backend: Arc<ResearchBackend>,
}

impl TechSourcesTool {
    pub fn new(backend: Arc<ResearchBackend>) -> Self {
        Self { backend }
    }

    fn query(args: &Value) -> anyhow::Result<Vec<(&'static str, String)>> {
        let keyword = args["keyword"]
            .as_str()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing 'keyword' argument"))?;
        let period = Period::from_args(args)?;
        let limit = args["limit"]
            .as_u64()
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);

        Ok(vec![
            ("keyword", keyword.to_string()),
            ("period", period.to_string()),
            ("limit", limit.to_string()),
        ])
    }
}

#[async_trait]
impl Tool for TechSourcesTool {
    fn name(&self) -> &str {
        "tech_sources_tool"
    }

    fn description(&self) -> &str {
        "Find sources discussing a specific technology keyword. Use limit=10 and the same period used with tech_trends_tool."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "keyword": {
                    "type": "string",
                    "description": "Keyword returned by tech_trends_tool"
                },
                "period": {
                    "type": "string",
                    "enum": ["daily", "weekly", "monthly", "quarterly"],
                    "description": "Must match the period used with tech_trends_tool"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of sources to return (default: 10)"
                }
            },
            "required": ["keyword", "period"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = Self::query(&args)?;
        self.backend.get("sources", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_ten() {
        let query = TechSourcesTool::query(&json!({"keyword": "rust", "period": "weekly"})).unwrap();
        assert_eq!(query[2], ("limit", "10".to_string()));
    }

    #[test]
    fn limit_is_clamped() {
        let query =
            TechSourcesTool::query(&json!({"keyword": "rust", "period": "daily", "limit": 0}))
                .unwrap();
        assert_eq!(query[2], ("limit", "1".to_string()));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let err = TechSourcesTool::query(&json!({"keyword": "  ", "period": "daily"})).unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }
}
