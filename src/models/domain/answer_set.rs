use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::ResultCategory,
};

/// Per-question category choices for one diagnostic session.
///
/// Entries are only ever appended; a question that has been answered keeps
/// its first answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<u32, ResultCategory>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: u32, category: ResultCategory) -> AppResult<()> {
        if self.answers.contains_key(&question_id) {
            return Err(AppError::InvalidRequest(format!(
                "Question {} has already been answered",
                question_id
            )));
        }
        self.answers.insert(question_id, category);
        Ok(())
    }

    pub fn get(&self, question_id: u32) -> Option<ResultCategory> {
        self.answers.get(&question_id).copied()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.answers.keys().copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = ResultCategory> + '_ {
        self.answers.values().copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(u32, ResultCategory)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, ResultCategory)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
