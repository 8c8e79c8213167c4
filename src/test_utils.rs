#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{AnswerSet, ConversationTurn, ResultCategory},
        dto::request::AssistantRequestDto,
    };

    /// An assistant request for the Process result with a one-turn history
    pub fn assistant_request(message: &str) -> AssistantRequestDto {
        AssistantRequestDto {
            message: message.to_string(),
            history: vec![ConversationTurn::model(
                "I see your result was **Process Bottleneck**.",
            )],
            result: ResultCategory::Process,
        }
    }

    /// Answers for questions 1..=4 in order
    pub fn full_answers(categories: [ResultCategory; 4]) -> AnswerSet {
        (1u32..).zip(categories).collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::ResultCategory;

    #[test]
    fn test_fixtures_assistant_request() {
        let request = assistant_request("Hello");
        assert_eq!(request.message, "Hello");
        assert_eq!(request.history.len(), 1);
    }

    #[test]
    fn test_fixtures_full_answers() {
        let answers = full_answers([ResultCategory::Role; 4]);
        assert_eq!(answers.question_ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
