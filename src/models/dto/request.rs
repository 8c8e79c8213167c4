use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{AnswerSet, ConversationTurn, ResultCategory};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Message is required".into());
        return Err(err);
    }
    Ok(())
}

/// One assistant turn. The caller resupplies the whole history every time.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AssistantRequestDto {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub message: String,

    #[serde(default)]
    pub history: Vec<ConversationTurn>,

    pub result: ResultCategory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoreRequestDto {
    #[serde(default)]
    pub answers: AnswerSet,
}
