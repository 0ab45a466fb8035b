//! HTTP client for the trends/sources research backend.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::config::ToolsConfig;

/// Maximum characters of backend output handed back to the model.
const MAX_OUTPUT_CHARS: usize = 20000;

/// Time window shared by both research tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
        }
    }

    /// Parse the `period` argument of a tool call.
    pub fn from_args(args: &Value) -> anyhow::Result<Self> {
        let raw = args["period"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'period' argument"))?;
        raw.parse()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid period '{}': expected one of daily, weekly, monthly, quarterly",
                    s
                )
            })
    }
}

/// Research backend shared by the two tools.
pub struct ResearchBackend {
    config: ToolsConfig,
    client: reqwest::Client,
}

impl ResearchBackend {
    pub fn new(config: ToolsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tech-research-agent/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { config, client })
    }

    /// Build `{base}/{path}?{query}`, keeping any query already on the base URL.
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Url> {
        let base = self.config.api_url.as_deref().ok_or_else(|| {
            anyhow::anyhow!("Research backend is not configured (set TECH_TRENDS_API_URL)")
        })?;

        let mut url = Url::parse(base)
            .map_err(|e| anyhow::anyhow!("Invalid TECH_TRENDS_API_URL '{}': {}", base, e))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("TECH_TRENDS_API_URL '{}' cannot be a base URL", base))?
            .pop_if_empty()
            .push(path);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET an endpoint and return its JSON body as pretty-printed text.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<String> {
        let url = self.endpoint(path, query)?;
        tracing::info!("Research backend request: {}", url);

        let mut request = self.client.get(url);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "HTTP error: {} {}",
                status,
                truncate_chars(&body, 200)
            ));
        }

        let body = response.text().await?;
        let rendered = match serde_json::from_str::<Value>(&body) {
            Ok(json) => serde_json::to_string_pretty(&json)?,
            Err(_) => body,
        };
        Ok(truncate_output(rendered))
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn truncate_output(s: String) -> String {
    if s.chars().count() > MAX_OUTPUT_CHARS {
        format!(
            "{}... [content truncated, showing first {} chars]",
            truncate_chars(&s, MAX_OUTPUT_CHARS),
            MAX_OUTPUT_CHARS
        )
    } else {
        s
    }
}
