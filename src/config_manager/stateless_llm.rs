use serde::{Deserialize, Serialize};

/// Selects the model provider and holds the settings of each provider.
/// Only the section named by `llm_provider` has to be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub gemini_llm: Option<GeminiConfig>,

    #[serde(default)]
    pub openai_compatible_llm: Option<OpenAICompatibleConfig>,
}

fn default_llm_provider() -> String {
    "gemini_llm".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Configuration for the Gemini `generateContent` API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    pub llm_api_key: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    #[serde(default)]
    pub temperature: Option<f32>,
}

pub fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub fn default_gemini_model() -> String {
    "gemini-1.5-flash-8b".to_string()
}

/// Configuration for OpenAI-compatible chat completion providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAICompatibleConfig {
    pub base_url: String,

    pub llm_api_key: String,

    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    1.0
}

impl LLMConfig {
    /// Gemini configuration built around a bare API key
    pub fn gemini(api_key: String, model: Option<String>) -> Self {
        Self {
            llm_provider: default_llm_provider(),
            request_timeout_secs: default_request_timeout_secs(),
            gemini_llm: Some(GeminiConfig {
                base_url: default_gemini_base_url(),
                llm_api_key: api_key,
                model: model.unwrap_or_else(default_gemini_model),
                temperature: None,
            }),
            openai_compatible_llm: None,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self::gemini(String::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_section_fills_defaults() {
        let config: LLMConfig = serde_yaml::from_str(
            "gemini_llm:\n  llm_api_key: secret\n",
        )
        .unwrap();
        assert_eq!(config.llm_provider, "gemini_llm");
        assert_eq!(config.request_timeout_secs, 60);
        let gemini = config.gemini_llm.unwrap();
        assert_eq!(gemini.model, "gemini-1.5-flash-8b");
        assert_eq!(gemini.base_url, default_gemini_base_url());
        assert!(gemini.temperature.is_none());
        assert!(config.openai_compatible_llm.is_none());
    }

    #[test]
    fn openai_compatible_section_requires_model() {
        let result: Result<LLMConfig, _> = serde_yaml::from_str(
            "llm_provider: openai_compatible_llm\nopenai_compatible_llm:\n  base_url: http://localhost:11434/v1\n  llm_api_key: x\n",
        );
        assert!(result.is_err());
    }
}
