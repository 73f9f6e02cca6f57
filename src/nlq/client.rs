//! LLM client for the NLQ calls

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{NlqError, NlqResult};
use crate::config::{LlmConfig, LlmProvider};

pub struct LlmClient {
    client: Client,
    config: LlmConfig,
    api_base_url: String,
}

impl LlmClient {
    pub fn new(config: &LlmConfig) -> NlqResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| NlqError::ConfigError(e.to_string()))?;

        let api_base_url = config.api_base_url.clone().unwrap_or_else(|| {
            match config.provider {
                LlmProvider::OpenAi => "https://api.openai.com/v1".to_string(),
                LlmProvider::Ollama => "http://localhost:11434".to_string(),
            }
        });

        Ok(Self {
            client,
            config: config.clone(),
            api_base_url,
        })
    }

    /// One chat turn: system instruction plus user prompt, deterministic
    /// sampling, plain-text completion back.
    pub async fn chat(&self, system: &str, user: &str, max_tokens: u32) -> NlqResult<String> {
        match self.config.provider {
            LlmProvider::OpenAi => self.openai_chat(system, user, max_tokens).await,
            LlmProvider::Ollama => self.ollama_chat(system, user).await,
        }
    }

    async fn openai_chat(&self, system: &str, user: &str, max_tokens: u32) -> NlqResult<String> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            messages: Vec<Message<'a>>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct Response {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: MessageContent,
        }

        #[derive(Deserialize)]
        struct MessageContent {
            content: String,
        }

        let url = format!("{}/chat/completions", self.api_base_url);
        let mut request = self.client.post(&url).json(&Request {
            model: &self.config.model,
            messages: vec![
                Message { role: "system", content: system },
                Message { role: "user", content: user },
            ],
            temperature: 0.0,
            max_tokens,
        });
        if let Some(api_key) = self.config.api_key.as_ref() {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let resp = request
            .send()
            .await
            .map_err(|e| NlqError::NetworkError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NlqError::ApiError(format!(
                "chat endpoint returned {}",
                resp.status()
            )));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| NlqError::SerializationError(e.to_string()))?;
        Ok(result
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default())
    }

    async fn ollama_chat(&self, system: &str, user: &str) -> NlqResult<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            prompt: &'a str,
            system: &'a str,
            stream: bool,
        }

        #[derive(Deserialize)]
        struct Response {
            response: String,
        }

        let url = format!("{}/api/generate", self.api_base_url);
        let resp = self
            .client
            .post(&url)
            .json(&Request {
                model: &self.config.model,
                prompt: user,
                system,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| NlqError::NetworkError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NlqError::ApiError(format!(
                "Ollama error: {}",
                resp.status()
            )));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| NlqError::SerializationError(e.to_string()))?;
        Ok(result.response.trim().to_string())
    }
}
