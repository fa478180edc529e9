use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError,
    models::dto::{request::QualityPromptRequest, response::PromptResponse},
    services::prompt_builder::{batch_progression_prompt, quality_enhancement_for},
};

#[post("/api/prompts/quality")]
pub async fn quality_prompt(
    request: web::Json<QualityPromptRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let mut prompt = quality_enhancement_for(&request.activity_type, &request.context);

    if let (Some(index), Some(total)) = (request.batch_index, request.batch_total) {
        if index >= total {
            return Err(AppError::ValidationError(format!(
                "batch_index {} is out of range for batch_total {}",
                index, total
            )));
        }

        let progression = batch_progression_prompt(index, total, &request.previous_types);
        if !progression.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&progression);
        }
    }

    Ok(HttpResponse::Ok().json(PromptResponse { prompt }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn quality_prompt_includes_batch_progression() {
        let app = test::init_service(App::new().service(quality_prompt)).await;

        let req = test::TestRequest::post()
            .uri("/api/prompts/quality")
            .set_json(json!({
                "activity_type": "quiz-interativo",
                "context": { "topic": "Frações", "subject": "Matemática", "grade": "6º ano" },
                "batch_index": 0,
                "batch_total": 3,
                "previous_types": []
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let prompt = body["prompt"].as_str().unwrap_or_default();

        assert!(prompt.starts_with("DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA QUIZ"));
        assert!(prompt.contains("PROGRESSÃO EM LOTE (Atividade 1 de 3)"));
    }

    #[actix_web::test]
    async fn out_of_range_batch_index_is_rejected() {
        let app = test::init_service(App::new().service(quality_prompt)).await;

        let req = test::TestRequest::post()
            .uri("/api/prompts/quality")
            .set_json(json!({
                "activity_type": "plano-aula",
                "context": { "topic": "Clima", "subject": "Geografia", "grade": "6º ano" },
                "batch_index": 3,
                "batch_total": 3
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
