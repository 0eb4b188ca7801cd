use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// A remote text-generation service.
///
/// One call to `generate` is one outbound request. Implementations do not
/// retry; failures come back as errors for the pipeline to classify.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.trim().to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(crate::RecapError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))
        .into()),
    }
}
