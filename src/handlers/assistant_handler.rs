use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::AssistantRequestDto,
};

pub async fn assistant_reply(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<AssistantRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    let request = request.into_inner();
    log::info!(
        "[{}] Assistant turn for '{}' with {} prior turns",
        request_id,
        request.result,
        request.history.len()
    );

    match state.assistant_service.reply(request, &request_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err) => {
            log::warn!("[{}] Assistant turn failed: {}", request_id, err);
            Err(err)
        }
    }
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        handlers::configure,
        services::llm_client::{LlmClient, MockLlmClient, UpstreamFailure},
        test_utils::test_helpers::{assert_error_status, assert_success_status},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state_with(mock: MockLlmClient) -> AppState {
        AppState::with_client(Config::test_config(), Some(Arc::new(mock) as Arc<dyn LlmClient>))
    }

    #[actix_web::test]
    async fn test_assistant_returns_provider_text() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .times(1)
            .returning(|_, _, _| Ok("Hello".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(mock)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assistant")
            .set_json(json!({
                "message": "Hi",
                "history": [{"role": "model", "text": "Welcome"}],
                "result": "Process Bottleneck"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_success_status(resp.status());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "text": "Hello" }));
    }

    #[actix_web::test]
    async fn test_empty_message_never_reaches_provider() {
        let mut mock = MockLlmClient::new();
        mock.expect_send().times(0);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(mock)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assistant")
            .set_json(json!({ "message": "", "history": [], "result": "Role" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_is_method_not_allowed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(MockLlmClient::new())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/assistant").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method Not Allowed");
    }

    #[actix_web::test]
    async fn test_provider_forbidden_is_forwarded() {
        let mut mock = MockLlmClient::new();
        mock.expect_send()
            .returning(|_, _, _| Err(UpstreamFailure::new(Some(403), "API key not valid.")));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(mock)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assistant")
            .set_json(json!({ "message": "Hi", "history": [], "result": "Visibility" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().expect("error field");
        assert!(error.starts_with("API key not valid."));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_invalid_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(MockLlmClient::new())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assistant")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
    }
}
