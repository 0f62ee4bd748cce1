//! Suggestion gateway: turns an ingredient list into a recipe suggestion from a hosted LLM.
//!
//! The provider's text is returned verbatim. Any provider failure is logged here and
//! reported to the caller only as "no suggestion".

mod groq;

pub use groq::{GroqProvider, DEFAULT_BASE_URL, MODEL, TEMPERATURE};

use async_trait::async_trait;
use thiserror::Error;

const SYSTEM_PROMPT: &str = "You are a professional chef who creates structured recipes.";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("missing API key")]
    MissingApiKey,
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("undecodable response: {0}")]
    Decode(String),
    #[error("provider returned no content")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One chat completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: &'static str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// The fixed recipe prompt around the caller's ingredient text.
    pub fn recipe_for(ingredients: &str) -> Self {
        CompletionRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: format!(
                        "Create a detailed recipe using:\n{}\n\nFormat:\nRecipe Name:\nIngredients:\nInstructions:\n",
                        ingredients
                    ),
                },
            ],
        }
    }
}

/// A text-generation backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

pub struct SuggestionGateway {
    provider: Box<dyn CompletionProvider>,
}

impl SuggestionGateway {
    pub fn new(provider: impl CompletionProvider + 'static) -> Self {
        SuggestionGateway {
            provider: Box::new(provider),
        }
    }

    /// `None` when the provider failed or produced nothing usable.
    pub async fn suggest(&self, ingredients: &str) -> Option<String> {
        let request = CompletionRequest::recipe_for(ingredients);
        match self.provider.complete(&request).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(provider = self.provider.name(), "empty suggestion");
                None
            }
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!(provider = self.provider.name(), error = %e, "suggestion failed");
                None
            }
        }
    }
}
