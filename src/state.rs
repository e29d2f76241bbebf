use std::sync::Arc;

use crate::config_manager::LLMConfig;
use crate::llm::{StatelessLLMFactory, StatelessLLMInterface};

/// Shared per-request state. Holds only the model client handle;
/// the credential lives inside that client and nowhere else.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn StatelessLLMInterface>,
}

impl AppState {
    pub fn new(llm_config: &LLMConfig) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(llm_config)?;
        Ok(Self::with_llm(llm))
    }

    pub fn with_llm(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_from_llm_config() {
        let state = AppState::new(&LLMConfig::gemini("SECRET-KEY".to_string(), None)).unwrap();
        assert_eq!(state.llm.provider_name(), "gemini_llm");
    }

    #[test]
    fn rejects_config_without_usable_key() {
        assert!(AppState::new(&LLMConfig::default()).is_err());
    }
}
