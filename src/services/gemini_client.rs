use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ChatRole, ConversationTurn},
    services::llm_client::{LlmClient, UpstreamFailure},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Content<'a> {
    fn text(role: Option<ChatRole>, text: &'a str) -> Self {
        Self {
            role: role.map(ChatRole::as_str),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorEnvelope {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    code: Option<u16>,
    message: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

fn build_request<'a>(
    system_prompt: &'a str,
    history: &'a [ConversationTurn],
    message: &'a str,
) -> GenerateContentRequest<'a> {
    let mut contents: Vec<Content<'a>> = history
        .iter()
        .map(|turn| Content::text(Some(turn.role), &turn.text))
        .collect();
    contents.push(Content::text(Some(ChatRole::User), message));

    GenerateContentRequest {
        system_instruction: Content::text(None, system_prompt),
        contents,
    }
}

/// Decodes a non-success body. Falls back to the HTTP status when the body is not
/// the provider's error envelope.
fn failure_from_body(status: u16, body: &str) -> UpstreamFailure {
    let detail = Some(body.to_string());
    match serde_json::from_str::<ProviderErrorEnvelope>(body) {
        Ok(envelope) => UpstreamFailure {
            status: envelope.error.code.or(Some(status)),
            message: envelope.error.message,
            detail,
        },
        Err(_) => UpstreamFailure {
            status: Some(status),
            message: None,
            detail,
        },
    }
}

/// Generative Language REST client for a single model.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("bottleneck-diagnostic/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn send(
        &self,
        system_prompt: &str,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<String, UpstreamFailure> {
        let body = build_request(system_prompt, history, message);

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamFailure {
                status: e.status().map(|s| s.as_u16()),
                message: None,
                detail: Some(format!("request failed: {}", e)),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| UpstreamFailure {
            status: Some(status.as_u16()),
            message: None,
            detail: Some(format!("unreadable body: {}", e)),
        })?;

        if !status.is_success() {
            return Err(failure_from_body(status.as_u16(), &text));
        }

        serde_json::from_str::<GenerateContentResponse>(&text)
            .map(GenerateContentResponse::into_text)
            .map_err(|e| UpstreamFailure {
                detail: Some(format!("unparseable reply ({}): {}", e, text)),
                ..UpstreamFailure::new(Some(502), "The model provider returned an unreadable response")
            })
    }
}
