use anyhow::{Context, Result, bail};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{Client, config::OpenAIConfig};

/// Default chat model served by the local Ollama instance.
pub const DEFAULT_MODEL: &str = "llama3.1";

/// OpenAI-compatible endpoint exposed by a local Ollama server.
const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

// Ollama ignores the bearer token; the client config just needs one present.
const PLACEHOLDER_API_KEY: &str = "ollama";

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// One chat-completion round trip. The session loop is generic over this
/// so tests can substitute a scripted completer for the live backend.
#[allow(async_fn_in_trait)]
pub trait Complete {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl LlmClient {
    pub fn new(model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(OLLAMA_BASE_URL)
            .with_api_key(PLACEHOLDER_API_KEY);

        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

impl Complete for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .with_context(|| format!("LLM request to model {} failed", self.model))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        let trimmed = content.trim();
        if trimmed.is_empty() {
            bail!("No content returned from model");
        }
        Ok(trimmed.to_string())
    }
}
