use std::sync::Arc;

use crate::{
    config::Config,
    constants::diagnostic_questions::standard_question_bank,
    errors::AppResult,
    services::{
        assistant_service::AssistantService, diagnostic_service::DiagnosticService,
        gemini_client::GeminiClient, llm_client::LlmClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub assistant_service: Arc<AssistantService>,
    pub diagnostic_service: Arc<DiagnosticService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the provider client from the configured credential, if there is one.
    pub fn new(config: Config) -> AppResult<Self> {
        let client = match &config.api_key {
            Some(api_key) => {
                let gemini = GeminiClient::new(
                    config.gemini_base_url.clone(),
                    config.gemini_model.clone(),
                    api_key.clone(),
                )?;
                Some(Arc::new(gemini) as Arc<dyn LlmClient>)
            }
            None => None,
        };

        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Option<Arc<dyn LlmClient>>) -> Self {
        let assistant_service = Arc::new(AssistantService::new(client, config.upstream_timeout()));
        let diagnostic_service = Arc::new(DiagnosticService::new(
            standard_question_bank(),
            config.booking_url.clone(),
        ));

        Self {
            assistant_service,
            diagnostic_service,
            config: Arc::new(config),
        }
    }
}
