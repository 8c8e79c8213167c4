pub mod assistant_service;
pub mod chat_session;
pub mod diagnostic_service;
pub mod diagnostic_session;
pub mod gemini_client;
pub mod llm_client;
pub mod scoring;
pub mod session_store;
