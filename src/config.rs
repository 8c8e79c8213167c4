use std::{env, time::Duration};

use secrecy::SecretString;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BOOKING_URL: &str = "https://calendar.app.google/xiA5mmnkpeKbmcAP9";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub upstream_timeout_secs: u64,
    pub booking_url: String,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_key: env::var("API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|s| *s > 0)
                .unwrap_or(30),
            booking_url: env::var("BOOKING_URL")
                .unwrap_or_else(|_| DEFAULT_BOOKING_URL.to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Logs a warning for every setting that leaves part of the service degraded.
    /// The server still starts; the assistant route answers with a configuration error.
    pub fn warn_on_missing_secrets(&self) {
        if self.api_key.is_none() {
            log::warn!(
                "API_KEY is not set; /api/assistant will answer with a configuration error"
            );
        }

        if self.cors_allowed_origin.is_none() {
            log::warn!("CORS_ALLOWED_ORIGIN is not set; allowing any origin");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            upstream_timeout_secs: 5,
            booking_url: DEFAULT_BOOKING_URL.to_string(),
            cors_allowed_origin: None,
        }
    }
}
