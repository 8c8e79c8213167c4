use crate::{
    constants::diagnostic_questions::LEAD_MAGNET_TITLE,
    errors::{AppError, AppResult},
    models::domain::{AnswerSet, Question, QuestionBank, ResultCategory},
    services::{
        scoring::calculate_result,
        session_store::{SessionStore, COMPLETED_KEY, RESULT_KEY, TITLE_KEY},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticPhase {
    NotStarted,
    InProgress { index: usize },
    Completed(ResultCategory),
}

/// One visitor's walk through the question bank.
pub struct DiagnosticSession<'a, S: SessionStore> {
    bank: &'a QuestionBank,
    store: S,
    answers: AnswerSet,
    phase: DiagnosticPhase,
}

impl<'a, S: SessionStore> DiagnosticSession<'a, S> {
    /// Restores a completed session when the store holds a completion flag and
    /// a readable result, otherwise starts fresh.
    pub fn resume(bank: &'a QuestionBank, store: S) -> Self {
        let completed = store.get(COMPLETED_KEY).as_deref() == Some("true");
        let stored_result = store
            .get(RESULT_KEY)
            .and_then(|raw| raw.parse::<ResultCategory>().ok());

        let phase = match (completed, stored_result) {
            (true, Some(result)) => DiagnosticPhase::Completed(result),
            _ => DiagnosticPhase::NotStarted,
        };

        Self {
            bank,
            store,
            answers: AnswerSet::new(),
            phase,
        }
    }

    pub fn phase(&self) -> DiagnosticPhase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<ResultCategory> {
        match self.phase {
            DiagnosticPhase::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn start(&mut self) {
        if self.phase == DiagnosticPhase::NotStarted {
            self.phase = DiagnosticPhase::InProgress { index: 0 };
        }
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        match self.phase {
            DiagnosticPhase::InProgress { index } => self.bank.get(index),
            _ => None,
        }
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.bank.len();
        match self.phase {
            DiagnosticPhase::NotStarted => (0, total),
            DiagnosticPhase::InProgress { index } => (index, total),
            DiagnosticPhase::Completed(_) => (total, total),
        }
    }

    pub fn progress_percent(&self) -> u8 {
        let (answered, total) = self.progress();
        if total == 0 {
            return 0;
        }
        ((answered as f64 / total as f64) * 100.0).round() as u8
    }

    /// Records the answer to the current question. Returns the result once the
    /// last question has been answered.
    pub fn answer(&mut self, category: ResultCategory) -> AppResult<Option<ResultCategory>> {
        let DiagnosticPhase::InProgress { index } = self.phase else {
            return Err(AppError::InvalidRequest(
                "The diagnostic is not in progress".to_string(),
            ));
        };

        let question = self.bank.get(index).ok_or_else(|| {
            AppError::InternalError(format!("No question at position {}", index))
        })?;
        self.answers.record(question.id, category)?;

        if index + 1 < self.bank.len() {
            self.phase = DiagnosticPhase::InProgress { index: index + 1 };
            return Ok(None);
        }

        let result = calculate_result(&self.answers);
        self.store.set(COMPLETED_KEY, "true");
        self.store.set(TITLE_KEY, LEAD_MAGNET_TITLE);
        self.store.set(RESULT_KEY, result.title());
        self.phase = DiagnosticPhase::Completed(result);

        log::info!("Diagnostic completed with result '{}'", result);
        Ok(Some(result))
    }

    /// Answers the current question by option id.
    pub fn choose(&mut self, option_id: &str) -> AppResult<Option<ResultCategory>> {
        let category = self
            .current_question()
            .and_then(|q| q.option(option_id))
            .map(|o| o.category)
            .ok_or_else(|| {
                AppError::InvalidRequest(format!(
                    "Option '{}' does not belong to the current question",
                    option_id
                ))
            })?;
        self.answer(category)
    }

    /// Forgets the stored completion so the diagnostic can be taken again.
    pub fn reset(&mut self) {
        self.store.remove(COMPLETED_KEY);
        self.store.remove(TITLE_KEY);
        self.store.remove(RESULT_KEY);
        self.answers = AnswerSet::new();
        self.phase = DiagnosticPhase::NotStarted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::diagnostic_questions::standard_question_bank,
        services::session_store::InMemorySessionStore,
    };
    use std::sync::Arc;

    #[test]
    fn fresh_store_starts_not_started() {
        let session = DiagnosticSession::resume(standard_question_bank(), InMemorySessionStore::new());

        assert_eq!(session.phase(), DiagnosticPhase::NotStarted);
        assert!(session.current_question().is_none());
        assert_eq!(session.progress(), (0, 4));
    }

    #[test]
    fn answering_every_question_completes_and_persists() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = DiagnosticSession::resume(standard_question_bank(), store.clone());
        session.start();

        assert_eq!(session.current_question().map(|q| q.id), Some(1));
        assert_eq!(session.choose("1c").unwrap(), None);
        assert_eq!(session.answer(ResultCategory::Visibility).unwrap(), None);
        assert_eq!(session.progress_percent(), 50);
        assert_eq!(session.answer(ResultCategory::Role).unwrap(), None);
        let result = session.answer(ResultCategory::Process).unwrap();

        assert_eq!(result, Some(ResultCategory::Visibility));
        assert_eq!(session.phase(), DiagnosticPhase::Completed(ResultCategory::Visibility));
        assert_eq!(store.get(COMPLETED_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(TITLE_KEY).as_deref(), Some(LEAD_MAGNET_TITLE));
        assert_eq!(
            store.get(RESULT_KEY).as_deref(),
            Some("Performance Visibility Bottleneck")
        );
    }

    #[test]
    fn completed_session_resumes_from_store() {
        let store = InMemorySessionStore::new();
        store.set(COMPLETED_KEY, "true");
        store.set(RESULT_KEY, "Role & Ownership Bottleneck");

        let session = DiagnosticSession::resume(standard_question_bank(), store);

        assert_eq!(session.result(), Some(ResultCategory::Role));
        assert_eq!(session.progress(), (4, 4));
    }

    #[test]
    fn unreadable_stored_result_starts_fresh() {
        let store = InMemorySessionStore::new();
        store.set(COMPLETED_KEY, "true");
        store.set(RESULT_KEY, "garbage");

        let session = DiagnosticSession::resume(standard_question_bank(), store);

        assert_eq!(session.phase(), DiagnosticPhase::NotStarted);
    }

    #[test]
    fn answering_before_start_is_rejected() {
        let mut session =
            DiagnosticSession::resume(standard_question_bank(), InMemorySessionStore::new());

        assert!(session.answer(ResultCategory::Process).is_err());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn foreign_option_is_rejected() {
        let mut session =
            DiagnosticSession::resume(standard_question_bank(), InMemorySessionStore::new());
        session.start();

        assert!(session.choose("2a").is_err());
        assert_eq!(session.progress(), (0, 4));
    }

    #[test]
    fn reset_clears_store_and_answers() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = DiagnosticSession::resume(standard_question_bank(), store.clone());
        session.start();
        for _ in 0..4 {
            session.answer(ResultCategory::Role).unwrap();
        }

        session.reset();

        assert_eq!(session.phase(), DiagnosticPhase::NotStarted);
        assert!(session.answers().is_empty());
        assert_eq!(store.get(COMPLETED_KEY), None);
    }
}
