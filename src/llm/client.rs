use crate::error::{ReclassifyError, Result};
use crate::llm::prompts::classification_prompt;
use crate::TextGenerator;
use log::debug;
use serde::Deserialize;
use serde_json::json;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Blocking client for the Groq chat-completions API, implementing the
/// [`TextGenerator`] port. Requests run at temperature 0 so repeated
/// conversions of the same document stay comparable.
pub struct GroqClient {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            base_url: GROQ_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads the credential from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            ReclassifyError::Generation("GROQ_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn chat(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| ReclassifyError::Generation(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReclassifyError::Generation(format!(
                "Groq API error (status {}): {}",
                status, body
            )));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| ReclassifyError::Generation(format!("malformed API response: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ReclassifyError::Generation("API response contained no choices".to_string())
            })?;

        debug!("model returned {} chars", content.len());
        Ok(content)
    }
}

impl TextGenerator for GroqClient {
    fn classify(&self, balance_sheet_text: &str) -> Result<String> {
        self.chat(&classification_prompt(balance_sheet_text))
    }
}
