use actix_web::{
    http::{header::ALLOW, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::llm_client::UpstreamFailure;

pub const DEFAULT_UPSTREAM_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{}. The model provider rejected the server's API key; check that API_KEY is set and allowed for this deployment", .message.trim_end_matches('.'))]
    UpstreamAuthError { status: u16, message: String },

    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Timed out after {0}s waiting for the model provider")]
    Timeout(u64),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Normalizes a provider failure into the status and message the caller sees.
    pub fn from_upstream(failure: UpstreamFailure) -> Self {
        let status = failure
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .filter(|code| code.is_client_error() || code.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .as_u16();
        let message = failure
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_MESSAGE.to_string());

        match status {
            401 | 403 => AppError::UpstreamAuthError { status, message },
            _ => AppError::UpstreamError { status, message },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::UpstreamAuthError { .. } => "UPSTREAM_AUTH_ERROR",
            AppError::UpstreamError { .. } => "UPSTREAM_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UpstreamAuthError { status, .. } | AppError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, AppError::MethodNotAllowed) {
            response.insert_header((ALLOW, "POST"));
        }
        response.json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: Some(self.error_code().to_string()),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
