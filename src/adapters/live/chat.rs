//! Live adapter for the `ChatClient` port using the OpenAI chat-completions API.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::chat::{ChatClient, ChatFuture, ChatRequest, ChatResponse};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Live chat client that calls the OpenAI API.
pub struct LiveChatClient {
    client: Client,
}

impl LiveChatClient {
    /// Creates a new live chat client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveChatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body sent to the chat-completions API.
#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// A single message in the chat-completions request.
#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Top-level response from the chat-completions API.
#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<Choice>,
}

/// One completion choice in the response.
#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

/// The assistant message inside a choice.
#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Error response from the API.
#[derive(Deserialize)]
struct OpenAiError {
    error: OpenAiErrorDetail,
}

/// Detail inside an error response.
#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

impl ChatClient for LiveChatClient {
    fn complete(&self, request: &ChatRequest) -> ChatFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
                Box::<dyn std::error::Error + Send + Sync>::from(
                    "OPENAI_API_KEY environment variable not set",
                )
            })?;

            let body = OpenAiRequest {
                model: &request.model,
                messages: vec![
                    OpenAiMessage { role: "system", content: &request.system },
                    OpenAiMessage { role: "user", content: &request.user },
                ],
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            };

            let response = self
                .client
                .post(OPENAI_API_URL)
                .bearer_auth(&api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("chat API request failed: {e}").into()
                })?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read chat API response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<OpenAiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("chat API error ({}): {msg}", status.as_u16()).into());
            }

            let api_response: OpenAiResponse = serde_json::from_str(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse chat API response: {e}").into()
                },
            )?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| -> Box<dyn std::error::Error + Send + Sync> {
                    "chat API response contained no choices".into()
                })?;

            Ok(ChatResponse { content })
        })
    }
}
