use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{config::Config, errors::LlmError, models::domain::GeneratedQuestionSet};

/// One outbound completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    /// JSON schema the response is requested to conform to.
    pub response_schema: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LlmResponse {
    /// Set when the client could decode the body into the requested shape.
    pub parsed: Option<GeneratedQuestionSet>,
    pub text: String,
}

impl LlmResponse {
    /// Wraps a raw body, attempting the strict structured decode.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = serde_json::from_str::<GeneratedQuestionSet>(&text).ok();
        Self { parsed, text }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
///
/// Built once at startup and shared by every request; it holds no
/// per-request state. Retries are disabled: each `complete` sends exactly
/// one HTTP request and provider errors surface immediately.
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(&config.llm_api_base);

        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
        }
    }

    fn request_body(request: &LlmRequest) -> serde_json::Value {
        json!({
            "model": request.model,
            "messages": [
                { "role": "user", "content": request.prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "generation_result",
                    "schema": request.response_schema,
                    "strict": false
                }
            }
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(Self::request_body(&request))
            .await?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(LlmResponse::from_text(text))
    }
}
