//! Scripted chat-client adapter returning canned completions.

use crate::ports::chat::{ChatClient, ChatFuture, ChatRequest, ChatResponse};

/// Chat-client double that replies with a fixed body or a fixed error.
pub struct ScriptedChatClient {
    reply: Result<String, String>,
}

impl ScriptedChatClient {
    /// Creates a client that always replies with `content`.
    #[must_use]
    pub fn replying(content: &str) -> Self {
        Self { reply: Ok(content.to_string()) }
    }

    /// Creates a client that always fails with `message`, simulating a
    /// network or API failure.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_string()) }
    }
}

impl ChatClient for ScriptedChatClient {
    fn complete(&self, _request: &ChatRequest) -> ChatFuture<'_> {
        let reply = self.reply.clone();
        Box::pin(async move {
            match reply {
                Ok(content) => Ok(ChatResponse { content }),
                Err(message) => Err(message.into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4o-mini".into(),
            system: "be helpful".into(),
            user: "hello".into(),
            temperature: 0.7,
            max_tokens: 100,
        }
    }

    #[tokio::test]
    async fn replying_client_returns_content() {
        let client = ScriptedChatClient::replying("canned");
        let response = client.complete(&request()).await.unwrap();
        assert_eq!(response.content, "canned");
    }

    #[tokio::test]
    async fn failing_client_returns_error() {
        let client = ScriptedChatClient::failing("connection refused");
        let result = client.complete(&request()).await;
        assert!(result.unwrap_err().to_string().contains("connection refused"));
    }
}
