use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub xai_api_key: Option<SecretString>,
    pub xai_base_url: String,
    pub xai_model: String,
    pub gemini_api_key: Option<SecretString>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub provider_max_attempts: u32,
    pub provider_base_delay_ms: u64,
    pub provider_timeout_secs: u64,
    pub provider_temperature: f32,
    pub provider_max_tokens: u32,
    pub history_limit: usize,
    pub max_sessions: usize,
}

fn secret_from_env(key: &str) -> Option<SecretString> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

fn parsed_from_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_from_env("WEB_SERVER_PORT", 8080),
            xai_api_key: secret_from_env("XAI_API_KEY"),
            xai_base_url: env::var("XAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.x.ai/v1".to_string()),
            xai_model: env::var("XAI_MODEL").unwrap_or_else(|_| "grok-3-latest".to_string()),
            gemini_api_key: secret_from_env("GEMINI_API_KEY"),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/models".to_string()
            }),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            provider_max_attempts: parsed_from_env("PROVIDER_MAX_ATTEMPTS", 3),
            provider_base_delay_ms: parsed_from_env("PROVIDER_BASE_DELAY_MS", 1000),
            provider_timeout_secs: parsed_from_env("PROVIDER_TIMEOUT_SECS", 30),
            provider_temperature: parsed_from_env("PROVIDER_TEMPERATURE", 0.7),
            provider_max_tokens: parsed_from_env("PROVIDER_MAX_TOKENS", 2048),
            history_limit: parsed_from_env("CONVERSATION_HISTORY_LIMIT", 10),
            max_sessions: parsed_from_env("CONVERSATION_MAX_SESSIONS", 1000),
        }
    }

    /// Rejects settings the providers cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.web_server_port == 0 {
            return Err(AppError::ValidationError(
                "WEB_SERVER_PORT must be non-zero".to_string(),
            ));
        }

        if self.provider_max_attempts == 0 {
            return Err(AppError::ValidationError(
                "PROVIDER_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        if self.history_limit < 2 {
            return Err(AppError::ValidationError(format!(
                "CONVERSATION_HISTORY_LIMIT must keep the system message and one turn, got {}",
                self.history_limit
            )));
        }

        if self.max_sessions == 0 {
            return Err(AppError::ValidationError(
                "CONVERSATION_MAX_SESSIONS must be at least 1".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.provider_temperature) {
            return Err(AppError::ValidationError(format!(
                "PROVIDER_TEMPERATURE out of range: {}",
                self.provider_temperature
            )));
        }

        if self.xai_api_key.is_none() && self.gemini_api_key.is_none() {
            log::warn!(
                "Neither XAI_API_KEY nor GEMINI_API_KEY is set; exam generation will fail and quizzes will use fallback content"
            );
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            xai_api_key: None,
            xai_base_url: "http://127.0.0.1:9/v1".to_string(),
            xai_model: "grok-test".to_string(),
            gemini_api_key: None,
            gemini_base_url: "http://127.0.0.1:9/v1beta/models".to_string(),
            gemini_model: "gemini-test".to_string(),
            provider_max_attempts: 1,
            provider_base_delay_ms: 1,
            provider_timeout_secs: 1,
            provider_temperature: 0.7,
            provider_max_tokens: 256,
            history_limit: 10,
            max_sessions: 16,
        }
    }
}
