use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        model_service::TextGenerator,
        providers::{build_generator, ConversationStore},
        question_service::QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub conversations: Arc<ConversationStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let conversations = Arc::new(ConversationStore::with_max_sessions(
            config.history_limit,
            config.max_sessions,
        ));
        let generator = build_generator(&config, Arc::clone(&conversations))?;

        Ok(Self::with_generator(config, generator, conversations))
    }

    pub fn with_generator(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        conversations: Arc<ConversationStore>,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(generator)),
            conversations,
            config: Arc::new(config),
        }
    }
}
