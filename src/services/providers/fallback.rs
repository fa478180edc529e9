use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    services::model_service::{GenerationOptions, TextGenerator},
};

/// Tries `primary`, then `secondary` on any failure.
pub struct FallbackProvider {
    primary: Arc<dyn TextGenerator>,
    secondary: Arc<dyn TextGenerator>,
}

impl FallbackProvider {
    pub fn new(primary: Arc<dyn TextGenerator>, secondary: Arc<dyn TextGenerator>) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl TextGenerator for FallbackProvider {
    async fn generate(
        &self,
        prompt: &str,
        session_id: &str,
        options: &GenerationOptions,
    ) -> AppResult<String> {
        match self.primary.generate(prompt, session_id, options).await {
            Ok(text) => Ok(text),
            Err(e) => {
                log::warn!("Primary provider failed, trying secondary: {}", e);
                self.secondary.generate(prompt, session_id, options).await
            }
        }
    }
}

/// Stands in when no provider credentials are configured.
pub struct UnavailableProvider;

#[async_trait]
impl TextGenerator for UnavailableProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _session_id: &str,
        _options: &GenerationOptions,
    ) -> AppResult<String> {
        Err(AppError::ProviderFailure(
            "no generation provider is configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockTextGenerator;

    #[tokio::test]
    async fn primary_success_skips_secondary() {
        let mut primary = MockTextGenerator::new();
        primary
            .expect_generate()
            .times(1)
            .returning(|_, _, _| Ok("primário".to_string()));
        let mut secondary = MockTextGenerator::new();
        secondary.expect_generate().never();

        let provider = FallbackProvider::new(Arc::new(primary), Arc::new(secondary));
        let text = provider
            .generate("p", "s", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "primário");
    }

    #[tokio::test]
    async fn primary_failure_uses_secondary() {
        let mut primary = MockTextGenerator::new();
        primary
            .expect_generate()
            .times(1)
            .returning(|_, _, _| Err(AppError::ProviderFailure("xai down".to_string())));
        let mut secondary = MockTextGenerator::new();
        secondary
            .expect_generate()
            .withf(|prompt, session, _| prompt == "p" && session == "s")
            .times(1)
            .returning(|_, _, _| Ok("secundário".to_string()));

        let provider = FallbackProvider::new(Arc::new(primary), Arc::new(secondary));
        let text = provider
            .generate("p", "s", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "secundário");
    }

    #[tokio::test]
    async fn both_failing_surfaces_secondary_error() {
        let provider = FallbackProvider::new(
            Arc::new(UnavailableProvider),
            Arc::new(UnavailableProvider),
        );

        let result = provider
            .generate("p", "s", &GenerationOptions::default())
            .await;

        assert!(matches!(result, Err(AppError::ProviderFailure(_))));
    }
}
