use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::prompts::SYSTEM_PERSONA_PROMPT,
    errors::{AppError, AppResult},
    services::{
        model_service::{GenerationOptions, TextGenerator},
        providers::conversation::ConversationStore,
    },
};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay before the attempt following `failed_attempt` (1-based).
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(failed_attempt.saturating_sub(1)))
    }
}

/// Chat-completions provider for any OpenAI-compatible endpoint (xAI by default).
pub struct OpenAiCompatibleProvider {
    label: String,
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
    retry: RetryPolicy,
    history: Arc<ConversationStore>,
}

impl OpenAiCompatibleProvider {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        label: impl Into<String>,
        api_key: &SecretString,
        api_base: &str,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        timeout: Duration,
        retry: RetryPolicy,
        history: Arc<ConversationStore>,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            label: label.into(),
            client: Client::with_config(config),
            model: model.into(),
            temperature,
            max_tokens,
            timeout,
            retry,
            history,
        }
    }

    async fn request_once(&self, request: &Value) -> AppResult<String> {
        let response: Value =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(request.clone()))
                .await
                .map_err(|_| {
                    AppError::ProviderFailure(format!(
                        "{} timed out after {}s",
                        self.label,
                        self.timeout.as_secs()
                    ))
                })??;

        completion_content(&response)
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions reply.
pub fn completion_content(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::MalformedResponse("chat completion without message content".to_string())
        })
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleProvider {
    async fn generate(
        &self,
        prompt: &str,
        session_id: &str,
        options: &GenerationOptions,
    ) -> AppResult<String> {
        let system_prompt = format!(
            "{}\n\n{}",
            SYSTEM_PERSONA_PROMPT,
            options.system_instructions()
        );
        let messages = self
            .history
            .push_user(session_id, &system_prompt, prompt)
            .await;

        let request = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.request_once(&request).await {
                Ok(content) => {
                    self.history.push_assistant(session_id, &content).await;
                    return Ok(content);
                }
                Err(e) if attempt >= self.retry.max_attempts => {
                    log::error!(
                        "{} attempt {}/{} failed: {}",
                        self.label,
                        attempt,
                        self.retry.max_attempts,
                        e
                    );
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.retry.delay_after(attempt);
                    log::warn!(
                        "{} attempt {}/{} failed: {}; retrying in {}ms",
                        self.label,
                        attempt,
                        self.retry.max_attempts,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
