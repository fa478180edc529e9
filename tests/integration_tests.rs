use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use questoes_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    services::{
        model_service::{GenerationOptions, TextGenerator},
        providers::{ConversationStore, UnavailableProvider},
    },
};

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        session_id: &str,
        _options: &GenerationOptions,
    ) -> AppResult<String> {
        Ok(format!(
            "Questão 1: Pergunta da sessão {}?\nTipo: Discursiva\nGabarito: Sim",
            session_id
        ))
    }
}

fn state(generator: Arc<dyn TextGenerator>) -> AppState {
    AppState::with_generator(Config::from_env(), generator, Arc::new(ConversationStore::new(10)))
}

#[actix_web::test]
async fn test_health_endpoint_carries_request_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(Arc::new(EchoGenerator))))
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
}

#[actix_web::test]
async fn test_exam_generation_end_to_end() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(Arc::new(EchoGenerator))))
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/questions/exam")
        .set_json(json!({
            "session_id": "turma-7b",
            "content": "Revolução Industrial",
            "config": { "total_questions": "1", "discursive": "1" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"][0]["number"], "1");
    assert_eq!(body["data"][0]["type"], "Discursiva");
    assert_eq!(body["data"][0]["statement"], "Pergunta da sessão turma-7b?");
    assert_eq!(body["data"][0]["answer"], "Sim");
}

#[actix_web::test]
async fn test_unconfigured_providers_split_exam_and_quiz_behavior() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(Arc::new(UnavailableProvider))))
            .configure(handlers::configure),
    )
    .await;

    let exam = test::TestRequest::post()
        .uri("/api/questions/exam")
        .set_json(json!({ "content": "Tema", "config": {} }))
        .to_request();
    let exam_resp = test::call_service(&app, exam).await;
    // an empty config has no questions to ask for
    assert_eq!(exam_resp.status(), StatusCode::BAD_REQUEST);

    let exam = test::TestRequest::post()
        .uri("/api/questions/exam")
        .set_json(json!({ "content": "Tema", "config": { "total_questions": "5" } }))
        .to_request();
    let exam_resp = test::call_service(&app, exam).await;
    assert_eq!(exam_resp.status(), StatusCode::BAD_GATEWAY);
    let error: Value = test::read_body_json(exam_resp).await;
    assert_eq!(error["kind"], "GENERATION_FAILED");

    let quiz = test::TestRequest::post()
        .uri("/api/questions/quiz")
        .set_json(json!({ "content": "Tema" }))
        .to_request();
    let quiz_body: Value = test::call_and_read_body_json(&app, quiz).await;
    assert_eq!(quiz_body["data"].as_array().map(Vec::len), Some(5));
}

#[actix_web::test]
async fn test_bncc_lookup_routes() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(Arc::new(EchoGenerator))))
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/bncc/components/Matem%C3%A1tica/grades")
        .to_request();
    let grades: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(grades.first().map(String::as_str), Some("1º Ano"));
    assert_eq!(grades.len(), 9);

    let req = test::TestRequest::get()
        .uri("/api/bncc/skills?component=Matem%C3%A1tica&grade=7&limit=1")
        .to_request();
    let skills: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["code"], "EF07MA01");
}
