use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::prompts::SYSTEM_PERSONA_PROMPT,
    errors::{AppError, AppResult},
    services::model_service::{GenerationOptions, TextGenerator},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-turn provider backed by the Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl GeminiProvider {
    pub fn new(
        api_key: SecretString,
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model),
            api_key,
        })
    }
}

pub fn request_body(prompt: &str, options: &GenerationOptions) -> Value {
    let text = format!(
        "{}\n\n{}\n\n{}",
        SYSTEM_PERSONA_PROMPT,
        options.system_instructions(),
        prompt
    );
    json!({ "contents": [{ "parts": [{ "text": text }] }] })
}

/// Pulls `candidates[0].content.parts[0].text` out of a Gemini reply.
pub fn candidate_text(response: &Value) -> AppResult<String> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::MalformedResponse("Gemini reply without candidate text".to_string())
        })
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        session_id: &str,
        options: &GenerationOptions,
    ) -> AppResult<String> {
        log::debug!("Gemini request for session {} (history not sent)", session_id);

        let response: Value = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&request_body(prompt, options))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        candidate_text(&response)
    }
}
