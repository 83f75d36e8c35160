//! Forwards a single user message to an OpenAI-style chat-completion API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const SYSTEM_PROMPT: &str = "You are a Python tutor. Respond in the context of python programming. Refuse non-programming related requests aside from pleasantries.";
pub const MODEL: &str = "gpt-4o-mini";
pub const MAX_TOKENS: u32 = 100;
pub const TEMPERATURE: f32 = 0.0;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("completion API returned no text")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn tutor(message: &'a str) -> Self {
        Self {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
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

impl ChatCompletionResponse {
    fn into_first_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Process-wide client for the completion API. Built once, shared read-only.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the tutor persona about `message` and returns the first choice's text.
    pub async fn tutor_reply(&self, message: &str) -> Result<String, CompletionError> {
        self.complete(ChatCompletionRequest::tutor(message))
            .await
            .inspect_err(|err| error!(error = %err, "OpenAI API error"))
    }

    async fn complete(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = request.model, "sending chat completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .into_first_text()
            .ok_or(CompletionError::EmptyCompletion)
    }
}
