use crate::{
    constants::diagnostic_questions::LEAD_MAGNET_TITLE,
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerSet, QuestionBank},
        dto::response::{DiagnosticOverviewDto, DiagnosticResultDto},
    },
    services::scoring::calculate_result,
};

pub struct DiagnosticService {
    bank: &'static QuestionBank,
    booking_url: String,
}

impl DiagnosticService {
    pub fn new(bank: &'static QuestionBank, booking_url: impl Into<String>) -> Self {
        Self {
            bank,
            booking_url: booking_url.into(),
        }
    }

    pub fn overview(&self) -> DiagnosticOverviewDto {
        DiagnosticOverviewDto {
            title: LEAD_MAGNET_TITLE.to_string(),
            questions: self.bank.questions().to_vec(),
            booking_url: self.booking_url.clone(),
        }
    }

    /// Scores a (possibly partial) answer set. Answers to questions outside the
    /// bank are rejected.
    pub fn score(&self, answers: &AnswerSet) -> AppResult<DiagnosticResultDto> {
        if let Some(unknown) = answers.question_ids().find(|id| self.bank.find(*id).is_none()) {
            return Err(AppError::InvalidRequest(format!(
                "Question with id '{}' not found",
                unknown
            )));
        }

        let result = calculate_result(answers);
        Ok(DiagnosticResultDto::new(LEAD_MAGNET_TITLE, result, answers.len()))
    }
}
