pub mod conversation;
pub mod fallback;
pub mod gemini;
pub mod openai_compatible;

use std::{sync::Arc, time::Duration};

pub use conversation::{ChatMessage, ChatRole, ConversationStore};
pub use fallback::{FallbackProvider, UnavailableProvider};
pub use gemini::GeminiProvider;
pub use openai_compatible::{OpenAiCompatibleProvider, RetryPolicy};

use crate::{config::Config, errors::AppResult, services::model_service::TextGenerator};

/// Assembles the provider chain: xAI first, Gemini as the fallback.
pub fn build_generator(
    config: &Config,
    history: Arc<ConversationStore>,
) -> AppResult<Arc<dyn TextGenerator>> {
    let timeout = Duration::from_secs(config.provider_timeout_secs);

    let xai: Option<Arc<dyn TextGenerator>> = config.xai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiCompatibleProvider::new(
            "xAI",
            key,
            &config.xai_base_url,
            config.xai_model.clone(),
            config.provider_temperature,
            config.provider_max_tokens,
            timeout,
            RetryPolicy {
                max_attempts: config.provider_max_attempts,
                base_delay: Duration::from_millis(config.provider_base_delay_ms),
            },
            history,
        )) as Arc<dyn TextGenerator>
    });

    let gemini: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
        Some(key) => Some(Arc::new(GeminiProvider::new(
            key.clone(),
            &config.gemini_base_url,
            &config.gemini_model,
            timeout,
        )?)),
        None => None,
    };

    let generator: Arc<dyn TextGenerator> = match (xai, gemini) {
        (Some(primary), Some(secondary)) => {
            log::info!("Generation providers: xAI with Gemini fallback");
            Arc::new(FallbackProvider::new(primary, secondary))
        }
        (Some(primary), None) => {
            log::info!("Generation providers: xAI only");
            primary
        }
        (None, Some(secondary)) => {
            log::info!("Generation providers: Gemini only");
            secondary
        }
        (None, None) => {
            log::warn!("No generation provider configured");
            Arc::new(UnavailableProvider)
        }
    };

    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::AppError, services::model_service::GenerationOptions};

    #[tokio::test]
    async fn no_credentials_builds_unavailable_provider() {
        let config = Config::test_config();
        let generator = build_generator(&config, Arc::new(ConversationStore::new(10)))
            .expect("generator builds without credentials");

        let result = generator
            .generate("p", "s", &GenerationOptions::default())
            .await;

        assert!(matches!(result, Err(AppError::ProviderFailure(_))));
    }
}
