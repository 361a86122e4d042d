//! Chat-completion client port for the AI collaborator.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`ChatClient`] to keep the trait dyn-compatible.
pub type ChatFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ChatResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A request for a single chat-completion round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model identifier (e.g. `"gpt-4o-mini"`).
    pub model: String,
    /// System instruction establishing the assistant's role.
    pub system: String,
    /// The user message body.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
}

/// The assistant's reply to a chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant message content.
    pub content: String,
}

/// Sends chat-completion requests to a language model.
pub trait ChatClient: Send + Sync {
    /// Generates a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, auth, rate-limit, etc.).
    fn complete(&self, request: &ChatRequest) -> ChatFuture<'_>;
}
