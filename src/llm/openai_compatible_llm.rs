use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::gemini_llm::upstream_error_message;
use super::stateless_llm_interface::StatelessLLMInterface;

/// OpenAI compatible LLM implementation.
/// Works with any provider exposing `/chat/completions` (OpenAI, Ollama, Groq, ...).
pub struct OpenAICompatibleLLM {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleLLM {
    pub fn new(
        client: Client,
        base_url: String,
        model: String,
        api_key: String,
        temperature: f32,
    ) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            temperature,
        }
    }
}

fn extract_content(response: ChatCompletionResponse) -> anyhow::Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Chat completion response contained no text"))
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn generate_completion(&self, prompt: &str) -> Result<String, anyhow::Error> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("LLM API error ({}): {}", status, upstream_error_message(&body));
        }

        let result: ChatCompletionResponse = response.json().await?;
        extract_content(result)
    }

    fn provider_name(&self) -> &'static str {
        "openai_compatible_llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn takes_first_choice_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": " Hola "}, "finish_reason": "stop"}]
        }))
        .unwrap();
        assert_eq!(extract_content(response).unwrap(), " Hola ");
    }

    #[test]
    fn missing_content_is_an_error() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(extract_content(response).is_err());

        let response: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_content(response).is_err());
    }
}
