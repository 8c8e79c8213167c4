use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::ResultCategory,
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub category: ResultCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Every question offers exactly one option per category.
    fn validate(&self) -> AppResult<()> {
        if self.options.len() != ResultCategory::ALL.len() {
            return Err(AppError::ConfigurationError(format!(
                "Question {} has {} options, expected {}",
                self.id,
                self.options.len(),
                ResultCategory::ALL.len()
            )));
        }

        let covered: HashSet<ResultCategory> = self.options.iter().map(|o| o.category).collect();
        if covered.len() != ResultCategory::ALL.len() {
            return Err(AppError::ConfigurationError(format!(
                "Question {} does not cover every category exactly once",
                self.id
            )));
        }

        let option_ids: HashSet<&str> = self.options.iter().map(|o| o.id.as_str()).collect();
        if option_ids.len() != self.options.len() {
            return Err(AppError::ConfigurationError(format!(
                "Question {} has duplicate option ids",
                self.id
            )));
        }

        Ok(())
    }
}

/// Ordered, validated question table. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::ConfigurationError(
                "Question bank must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(AppError::ConfigurationError(format!(
                    "Duplicate question id {}",
                    question.id
                )));
            }
            question.validate()?;
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
