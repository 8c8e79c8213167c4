use std::{sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    constants::prompts::assistant_system_instruction,
    errors::{AppError, AppResult},
    models::dto::{request::AssistantRequestDto, response::AssistantResponseDto},
    services::llm_client::LlmClient,
};

/// Stateless relay between the chat surface and the model provider.
pub struct AssistantService {
    client: Option<Arc<dyn LlmClient>>,
    timeout: Duration,
}

impl AssistantService {
    /// `client` is `None` when no provider credential was configured.
    pub fn new(client: Option<Arc<dyn LlmClient>>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// `request_id` tags the operator log lines written for this turn.
    pub async fn reply(
        &self,
        request: AssistantRequestDto,
        request_id: &str,
    ) -> AppResult<AssistantResponseDto> {
        request.validate()?;

        let client = self.client.as_ref().ok_or_else(|| {
            AppError::ConfigurationError(
                "The assistant is not configured: API_KEY is missing".to_string(),
            )
        })?;

        let instruction = assistant_system_instruction(request.result);

        let outcome = tokio::time::timeout(
            self.timeout,
            client.send(&instruction, &request.history, &request.message),
        )
        .await;

        match outcome {
            Ok(Ok(text)) => Ok(AssistantResponseDto { text }),
            Ok(Err(failure)) => {
                log::error!(
                    "[{}] Model provider error (status {:?}): {}",
                    request_id,
                    failure.status,
                    failure
                        .detail
                        .as_deref()
                        .or(failure.message.as_deref())
                        .unwrap_or("<empty>")
                );
                Err(AppError::from_upstream(failure))
            }
            Err(_) => {
                log::error!(
                    "[{}] Model provider did not answer within {}s",
                    request_id,
                    self.timeout.as_secs()
                );
                Err(AppError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{ChatRole, ConversationTurn, ResultCategory},
        services::llm_client::{MockLlmClient, UpstreamFailure},
        test_utils::fixtures::assistant_request,
    };
    use async_trait::async_trait;

    fn service_with(mock: MockLlmClient) -> AssistantService {
        AssistantService::new(Some(Arc::new(mock) as Arc<dyn LlmClient>), Duration::from_secs(5))
    }

    #[actix_web::test]
    async fn empty_message_is_rejected_without_calling_provider() {
        let mut mock = MockLlmClient::new();
        mock.expect_send().times(0);
        let service = service_with(mock);

        let result = service.reply(assistant_request(""), "test").await;

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[actix_web::test]
    async fn provider_text_is_returned_verbatim() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .times(1)
            .returning(|_, _, _| Ok("Hello".to_string()));
        let service = service_with(mock);

        let response = service.reply(assistant_request("Hi there"), "test").await.unwrap();

        assert_eq!(response, AssistantResponseDto { text: "Hello".to_string() });
    }

    #[actix_web::test]
    async fn prompt_history_and_message_are_forwarded() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .withf(|prompt, history, message| {
                prompt.contains("\"Role & Ownership Bottleneck\"")
                    && history.len() == 1
                    && history[0].role == ChatRole::Model
                    && message.to_string() == "What should I do first?"
            })
            .times(1)
            .returning(|_, _, _| Ok("Start with a RACI review.".to_string()));
        let service = service_with(mock);

        let request = AssistantRequestDto {
            message: "What should I do first?".to_string(),
            history: vec![ConversationTurn::model("I see your result was ...")],
            result: ResultCategory::Role,
        };

        assert!(service.reply(request, "test").await.is_ok());
    }

    #[actix_web::test]
    async fn provider_status_and_message_are_propagated() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .withf(|_, _, message| message.to_string() == "Hi")
            .returning(|_, _, _| Err(UpstreamFailure::new(Some(503), "The model is overloaded.")));
        let service = service_with(mock);

        let err = service.reply(assistant_request("Hi"), "test").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::UpstreamError { status: 503, ref message } if message == "The model is overloaded."
        ));
    }

    #[actix_web::test]
    async fn forbidden_becomes_auth_error() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .returning(|_, _, _| Err(UpstreamFailure::new(Some(403), "Permission denied")));
        let service = service_with(mock);

        let err = service.reply(assistant_request("Hi"), "test").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamAuthError { status: 403, .. }));
    }

    #[actix_web::test]
    async fn missing_client_is_a_configuration_error() {
        let service = AssistantService::new(None, Duration::from_secs(5));

        let err = service.reply(assistant_request("Hi"), "test").await.unwrap_err();

        assert!(!service.is_configured());
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }

    #[actix_web::test]
    async fn validation_runs_before_configuration_check() {
        let service = AssistantService::new(None, Duration::from_secs(5));

        let err = service.reply(assistant_request(" "), "test").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    struct SlowClient;

    #[async_trait]
    impl LlmClient for SlowClient {
        async fn send(
            &self,
            _system_prompt: &str,
            _history: &[ConversationTurn],
            _message: &str,
        ) -> Result<String, UpstreamFailure> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok("too late".to_string())
        }
    }

    #[actix_web::test]
    async fn slow_provider_times_out() {
        let service = AssistantService::new(
            Some(Arc::new(SlowClient) as Arc<dyn LlmClient>),
            Duration::from_millis(20),
        );

        let err = service.reply(assistant_request("Hi"), "test").await.unwrap_err();

        assert!(matches!(err, AppError::Timeout(_)));
    }
}
