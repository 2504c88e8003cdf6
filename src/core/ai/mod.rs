pub mod ai_service;
pub mod models;

pub use ai_service::{AiProvider, AiService};
pub use models::{AiError, CompletionRequest, DEFAULT_AI_TIMEOUT};
