use async_trait::async_trait;
use std::sync::Mutex;

use super::stateless_llm_interface::StatelessLLMInterface;

/// In-memory model used by tests: replies with a canned text or error
/// and records every prompt it was asked to complete.
pub struct MockLLM {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLLM {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatelessLLMInterface for MockLLM {
    async fn generate_completion(&self, prompt: &str) -> Result<String, anyhow::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock_llm"
    }
}
