use serde::Serialize;

use crate::models::domain::{Question, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

pub type ExamQuestionsResponse = ApiResponse<Vec<Question>>;
pub type QuizQuestionsResponse = ApiResponse<Vec<QuizQuestion>>;

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}
