use async_trait::async_trait;
use thiserror::Error;

use crate::models::domain::ConversationTurn;

/// A failure reported by, or while reaching, the model provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("model provider failure (status {status:?}): {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct UpstreamFailure {
    pub status: Option<u16>,
    pub message: Option<String>,
    /// Raw provider output or transport error, for operator logs only.
    pub detail: Option<String>,
}

impl UpstreamFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            detail: None,
        }
    }
}

/// Narrow capability over a hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `message` as the newest user turn after `history`, under `system_prompt`.
    async fn send(
        &self,
        system_prompt: &str,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<String, UpstreamFailure>;
}
