use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Question, ResultCategory};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssistantResponseDto {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticOverviewDto {
    pub title: String,
    pub questions: Vec<Question>,
    pub booking_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResultDto {
    pub title: String,
    pub result: ResultCategory,
    pub description: String,
    pub answered: usize,
    pub completed_at: DateTime<Utc>,
}

impl DiagnosticResultDto {
    pub fn new(title: &str, result: ResultCategory, answered: usize) -> Self {
        Self {
            title: title.to_string(),
            result,
            description: result.description().to_string(),
            answered,
            completed_at: Utc::now(),
        }
    }
}
