//! OpenAI-compatible chat-completions client (OpenRouter by default).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, ChatResponse, LlmClient, LlmError, ToolCall, ToolSchema, Usage};

/// Chat-completions client speaking the OpenAI wire format.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [ToolSchema]>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

impl OpenRouterClient {
    /// `base_url` is the OpenAI-compatible API root, e.g. `https://openrouter.ai/api/v1`.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[ToolSchema]>,
    ) -> Result<ChatResponse, LlmError> {
        let request = CompletionRequest {
            model,
            messages,
            tools: tools.filter(|t| !t.is_empty()),
        };

        tracing::debug!(
            "Sending chat completion: model={}, messages={}",
            model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("no choices in response".to_string()))?;

        Ok(ChatResponse {
            content: choice.message.content,
            tool_calls: choice.message.tool_calls,
            finish_reason: choice.finish_reason,
            usage: body.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serve_once;

    #[test]
    fn completions_url_trims_trailing_slash() {
        let client = OpenRouterClient::new("k".to_string(), "http://localhost:1234/v1/".into());
        assert_eq!(
            client.completions_url(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn parses_tool_call_response() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "tech_trends_tool", "arguments": "{\"period\":\"weekly\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let body: CompletionResponse = serde_json::from_str(raw).unwrap();
        let choice = &body.choices[0];
        let calls = choice.message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "tech_trends_tool");
        assert_eq!(choice.finish_reason.as_deref(), Some("tool_calls"));
        assert_eq!(body.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn request_omits_tools_when_absent() {
        let messages = vec![ChatMessage::user("hi")];
        let request = CompletionRequest {
            model: "m",
            messages: &messages,
            tools: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[tokio::test]
    async fn chat_completion_posts_request_and_parses_tool_calls() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":null,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"tech_trends_tool","arguments":"{}"}}]},"finish_reason":"tool_calls"}],"usage":{"prompt_tokens":3,"completion_tokens":2,"total_tokens":5}}"#,
        )
        .await;
        let client = OpenRouterClient::new("sk-test".to_string(), format!("{}/v1", base));

        let response = client
            .chat_completion("test-model", &[ChatMessage::user("trends?")], None)
            .await
            .unwrap();
        let calls = response.tool_calls.unwrap();
        assert_eq!(calls[0].id, "call_1");
        assert_eq!(calls[0].function.name, "tech_trends_tool");
        assert_eq!(response.finish_reason.as_deref(), Some("tool_calls"));
        assert_eq!(response.usage.unwrap().prompt_tokens, 3);

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""model":"test-model""#));
        assert!(request.contains(r#""content":"trends?""#));
    }

    #[tokio::test]
    async fn chat_completion_maps_error_status() {
        let (base, _request) = serve_once("429 Too Many Requests", "rate limited").await;
        let client = OpenRouterClient::new("sk-test".to_string(), base);

        let err = client
            .chat_completion("test-model", &[ChatMessage::user("q")], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LlmError::Api { status: 429, ref message } if message == "rate limited"
        ));
    }

    #[tokio::test]
    async fn chat_completion_without_choices_is_invalid() {
        let (base, _request) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let client = OpenRouterClient::new("sk-test".to_string(), base);

        let err = client
            .chat_completion("test-model", &[ChatMessage::user("q")], None)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(ref m) if m == "no choices in response"));
    }
}
