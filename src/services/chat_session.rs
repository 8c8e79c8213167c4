use crate::{
    constants::prompts::{
        assistant_opening_message, ASSISTANT_AUTH_FAILURE_REPLY, ASSISTANT_FALLBACK_REPLY,
    },
    errors::ErrorResponse,
    models::{
        domain::{ConversationTurn, ResultCategory},
        dto::request::AssistantRequestDto,
    },
};

/// Why an assistant turn produced no reply, as seen by the chat surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl ChatFailure {
    pub fn from_error_response(response: &ErrorResponse) -> Self {
        Self {
            status: Some(response.code),
            message: response.error.clone(),
        }
    }

    fn is_auth_failure(&self) -> bool {
        matches!(self.status, Some(401 | 403)) || self.message.contains("403")
    }

    /// The single assistant-style message shown in place of a reply.
    pub fn reply_text(&self) -> &'static str {
        if self.is_auth_failure() {
            ASSISTANT_AUTH_FAILURE_REPLY
        } else {
            ASSISTANT_FALLBACK_REPLY
        }
    }
}

/// Client-side state of one assistant conversation.
///
/// History is append-only and one request may be in flight at a time.
#[derive(Debug, Clone)]
pub struct ChatSession {
    result: ResultCategory,
    turns: Vec<ConversationTurn>,
    awaiting_reply: bool,
}

impl ChatSession {
    pub fn new(result: ResultCategory) -> Self {
        Self {
            result,
            turns: vec![ConversationTurn::model(assistant_opening_message(result))],
            awaiting_reply: false,
        }
    }

    pub fn result(&self) -> ResultCategory {
        self.result
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Appends the user's turn and returns the request to send, or `None` when the
    /// input is blank or a reply is still pending.
    pub fn submit(&mut self, input: &str) -> Option<AssistantRequestDto> {
        let message = input.trim();
        if message.is_empty() || self.awaiting_reply {
            return None;
        }

        let history = self.turns.clone();
        self.turns.push(ConversationTurn::user(message));
        self.awaiting_reply = true;

        Some(AssistantRequestDto {
            message: message.to_string(),
            history,
            result: self.result,
        })
    }

    pub fn receive(&mut self, outcome: Result<String, ChatFailure>) {
        match outcome {
            Ok(text) if !text.is_empty() => self.turns.push(ConversationTurn::model(text)),
            Ok(_) => {}
            Err(failure) => {
                log::warn!("Assistant turn failed: {:?}", failure);
                self.turns.push(ConversationTurn::model(failure.reply_text()));
            }
        }
        self.awaiting_reply = false;
    }
}
