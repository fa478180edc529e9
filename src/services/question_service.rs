use std::sync::Arc;

use crate::{
    constants::fallback_quiz::fallback_quiz_questions,
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionsConfig, QuizQuestion},
    services::{
        model_service::{GenerationOptions, TextGenerator},
        prompt_builder::{build_exam_prompt, build_quiz_prompt},
        question_parser::process_questions,
        quiz_parser::parse_quiz_response,
    },
};

pub const DEFAULT_SESSION: &str = "default_session";

fn session_or_default(context: &str) -> &str {
    if context.trim().is_empty() {
        DEFAULT_SESSION
    } else {
        context
    }
}

pub struct QuestionService {
    generator: Arc<dyn TextGenerator>,
}

impl QuestionService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_exam_questions(
        &self,
        context: &str,
        topic: &str,
        config: &QuestionsConfig,
    ) -> AppResult<Vec<Question>> {
        let session = session_or_default(context);
        let prompt = build_exam_prompt(topic, config);

        let reply = self
            .generator
            .generate(&prompt, session, &GenerationOptions::advanced_formal())
            .await
            .map_err(|e| {
                log::error!("Exam generation failed for session {}: {}", session, e);
                AppError::GenerationFailed(e.to_string())
            })?;

        let questions = process_questions(&reply);
        log::info!(
            "Extracted {} exam questions for session {}",
            questions.len(),
            session
        );

        Ok(questions)
    }

    /// Always yields a quiz; generation or parse failures fall back to the fixed set.
    pub async fn generate_quiz_questions(
        &self,
        context: &str,
        topic: &str,
        use_smart_difficulty: bool,
        use_study_mode: bool,
    ) -> Vec<QuizQuestion> {
        let session = session_or_default(context);
        log::debug!(
            "Quiz request for session {} (smart difficulty: {}, study mode: {})",
            session,
            use_smart_difficulty,
            use_study_mode
        );

        let prompt = build_quiz_prompt(topic, use_smart_difficulty);
        let reply = match self
            .generator
            .generate(&prompt, session, &GenerationOptions::advanced_formal())
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Quiz generation failed, using fallback quiz: {}", e);
                return fallback_quiz_questions();
            }
        };

        match parse_quiz_response(&reply) {
            Ok(questions) => questions,
            Err(e) => {
                log::warn!("Quiz reply rejected, using fallback quiz: {}", e);
                fallback_quiz_questions()
            }
        }
    }
}
