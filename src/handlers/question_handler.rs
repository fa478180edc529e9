use actix_web::{delete, http::header, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::QuestionsConfig,
        dto::{
            request::{ExportQuestionsRequest, GenerateExamQuestionsRequest, GenerateQuizRequest},
            response::{ExamQuestionsResponse, QuizQuestionsResponse},
        },
    },
    services::export_service::{export_file_name, render_questions_document},
};

#[post("/api/questions/exam")]
pub async fn generate_exam_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateExamQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let config = QuestionsConfig::try_from(request.config)?;

    let questions = state
        .question_service
        .generate_exam_questions(&request.session_id, &request.content, &config)
        .await?;

    Ok(HttpResponse::Ok().json(ExamQuestionsResponse {
        message: format!("Generated {} questions", questions.len()),
        data: questions,
    }))
}

#[post("/api/questions/quiz")]
pub async fn generate_quiz_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let questions = state
        .question_service
        .generate_quiz_questions(
            &request.session_id,
            &request.content,
            request.use_smart_difficulty,
            request.use_study_mode,
        )
        .await;

    Ok(HttpResponse::Ok().json(QuizQuestionsResponse {
        message: format!("Generated {} quiz questions", questions.len()),
        data: questions,
    }))
}

#[post("/api/questions/export")]
pub async fn export_questions(
    request: web::Json<ExportQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let document = render_questions_document(&request.questions);
    let file_name = export_file_name(chrono::Local::now().date_naive());

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(document))
}

#[delete("/api/sessions/{session_id}/history")]
pub async fn clear_session_history(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
) -> HttpResponse {
    state.conversations.clear(&session_id).await;
    log::info!("Cleared conversation history for session {}", session_id);
    HttpResponse::NoContent().finish()
}
