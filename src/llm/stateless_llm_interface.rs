use async_trait::async_trait;

/// Interface for a stateless language model.
/// Every call is independent: no history, no system prompt, no memory.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Generate a natural-language completion for a single prompt.
    /// Returns the raw model text; callers decide how to clean it up.
    async fn generate_completion(&self, prompt: &str) -> Result<String, anyhow::Error>;

    /// Provider key as used in the configuration file
    fn provider_name(&self) -> &'static str;
}
