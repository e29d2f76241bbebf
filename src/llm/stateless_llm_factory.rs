use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use super::gemini_llm::GeminiLLM;
use super::openai_compatible_llm::OpenAICompatibleLLM;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::config_manager::utils::is_unresolved_placeholder;
use crate::config_manager::LLMConfig;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create the LLM selected by `config.llm_provider`.
    /// The HTTP client is built here once and shared by every request.
    pub fn create_llm(config: &LLMConfig) -> Result<Arc<dyn StatelessLLMInterface>> {
        let provider = config.llm_provider.as_str();
        info!("Initializing LLM: {}", provider);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        match provider {
            "gemini_llm" => {
                let gemini = config
                    .gemini_llm
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("Missing gemini_llm section for provider gemini_llm"))?;
                check_api_key(provider, &gemini.llm_api_key)?;
                Ok(Arc::new(GeminiLLM::new(
                    client,
                    gemini.base_url.clone(),
                    gemini.model.clone(),
                    gemini.llm_api_key.clone(),
                    gemini.temperature,
                )))
            }
            "openai_compatible_llm" => {
                let openai = config.openai_compatible_llm.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("Missing openai_compatible_llm section for provider openai_compatible_llm")
                })?;
                check_api_key(provider, &openai.llm_api_key)?;
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    client,
                    openai.base_url.clone(),
                    openai.model.clone(),
                    openai.llm_api_key.clone(),
                    openai.temperature,
                )))
            }
            _ => Err(anyhow::anyhow!("Unsupported LLM provider: {}", provider)),
        }
    }
}

fn check_api_key(provider: &str, api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        anyhow::bail!("llm_api_key for {} is empty", provider);
    }
    if is_unresolved_placeholder(api_key) {
        anyhow::bail!(
            "llm_api_key for {} references an unset environment variable: {}",
            provider,
            api_key
        );
    }
    Ok(())
}
