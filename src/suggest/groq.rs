//! Groq chat completions over its OpenAI-compatible API.

use super::{CompletionProvider, CompletionRequest, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const MODEL: &str = "llama-3.1-8b-instant";
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat completions client. Uses the transport's default timeouts.
pub struct GroqProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GroqProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        GroqProvider {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let body = ChatCompletionRequest {
            model: request.model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
        };

        tracing::debug!(model = request.model, "sending chat completion");
        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Decode(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let p = GroqProvider::new("https://api.groq.com/openai/v1/", None);
        assert_eq!(p.api_url("chat/completions"), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let p = GroqProvider::new("http://127.0.0.1:9", None);
        let err = p.complete(&CompletionRequest::recipe_for("egg")).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let p = GroqProvider::new("http://127.0.0.1:9", Some("key".into()));
        let err = p.complete(&CompletionRequest::recipe_for("egg")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[test]
    fn request_serializes_in_openai_shape() {
        let req = CompletionRequest::recipe_for("egg");
        let body = ChatCompletionRequest {
            model: req.model,
            messages: req
                .messages
                .iter()
                .map(|m| WireMessage { role: m.role.as_str(), content: &m.content })
                .collect(),
            temperature: req.temperature,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["model"], "llama-3.1-8b-instant");
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
    }

    #[test]
    fn response_content_is_extracted() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":"Recipe Name: Omelette"}}]}"#)
                .unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Recipe Name: Omelette"));
    }
}
