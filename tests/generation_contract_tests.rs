use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use questoes_server::{
    constants::fallback_quiz::fallback_quiz_questions,
    errors::{AppError, AppResult},
    models::domain::QuestionsConfig,
    services::{
        model_service::{GenerationOptions, TextGenerator},
        question_service::{QuestionService, DEFAULT_SESSION},
    },
};

/// Replays canned replies in order and records every call it receives.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<AppResult<String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn always_failing() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        session_id: &str,
        _options: &GenerationOptions,
    ) -> AppResult<String> {
        self.calls
            .lock()
            .await
            .push((prompt.to_string(), session_id.to_string()));

        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::ProviderFailure("script exhausted".to_string())))
    }
}

fn quiz_element(id: &str, option_count: usize) -> String {
    let options: Vec<String> = (0..option_count)
        .map(|i| {
            format!(
                r#"{{"id":"{id}-{i}","text":"Opção {i}","isCorrect":{}}}"#,
                i == 0
            )
        })
        .collect();
    format!(
        r#"{{"id":"{id}","text":"Pergunta {id}","options":[{}],"explanation":"Porque sim."}}"#,
        options.join(",")
    )
}

fn service(generator: ScriptedGenerator) -> (QuestionService, Arc<ScriptedGenerator>) {
    let generator = Arc::new(generator);
    (QuestionService::new(generator.clone()), generator)
}

#[tokio::test]
async fn two_question_reply_splits_into_records() {
    let reply = "Questão 1: Quanto é 2+2?\nTipo: Matemática\nGabarito: 4\nExplicação: Soma simples.\nQuestão 2: Capital da França?\nGabarito: Paris";
    let (service, _) = service(ScriptedGenerator::new(vec![Ok(reply.to_string())]));

    let questions = service
        .generate_exam_questions("aula", "Revisão", &QuestionsConfig::default())
        .await
        .expect("exam generation succeeds");

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].number, "1");
    assert_eq!(questions[0].question_type, "Matemática");
    assert_eq!(questions[0].statement, "Quanto é 2+2?");
    assert_eq!(questions[0].answer, "4");
    assert_eq!(questions[0].explanation, "Soma simples.");
    assert_eq!(questions[1].number, "2");
    assert_eq!(questions[1].question_type, "Não especificado");
    assert_eq!(questions[1].statement, "Capital da França?");
    assert_eq!(questions[1].answer, "Paris");
    assert_eq!(questions[1].explanation, "");
}

#[tokio::test]
async fn exam_prompt_carries_topic_and_session() {
    let (service, generator) = service(ScriptedGenerator::new(vec![Ok("Texto livre".to_string())]));

    service
        .generate_exam_questions("", "Sistema solar", &QuestionsConfig::default())
        .await
        .expect("exam generation succeeds");

    let calls = generator.calls.lock().await;
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.contains("\"Sistema solar\""));
    assert_eq!(calls[0].1, DEFAULT_SESSION);
}

#[tokio::test]
async fn exam_failure_propagates_without_fallback() {
    let (service, _) = service(ScriptedGenerator::always_failing());

    let result = service
        .generate_exam_questions("aula", "Tema", &QuestionsConfig::default())
        .await;

    assert!(matches!(result, Err(AppError::GenerationFailed(_))));
}

#[tokio::test]
async fn quiz_below_threshold_returns_fallback_set() {
    let reply = format!("[{},{}]", quiz_element("a", 4), quiz_element("b", 4));
    let (service, _) = service(ScriptedGenerator::new(vec![Ok(reply)]));

    let questions = service
        .generate_quiz_questions("aula", "Tema", true, false)
        .await;

    assert_eq!(questions, fallback_quiz_questions());
}

#[tokio::test]
async fn quiz_option_count_boundary() {
    let reply = format!(
        "[{},{},{},{}]",
        quiz_element("a", 3),
        quiz_element("b", 2),
        quiz_element("c", 3),
        quiz_element("d", 4)
    );
    let (service, _) = service(ScriptedGenerator::new(vec![Ok(reply)]));

    let questions = service
        .generate_quiz_questions("aula", "Tema", false, false)
        .await;

    let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
    assert_eq!(questions[0].options.len(), 3);
}

#[tokio::test]
async fn always_failing_generator_yields_stable_fallback() {
    let (service, _) = service(ScriptedGenerator::always_failing());

    let first = service.generate_quiz_questions("s", "Tema", true, false).await;
    let second = service.generate_quiz_questions("s", "Tema", true, true).await;

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    for question in &first {
        assert!(!question.id.is_empty());
        assert!(!question.text.is_empty());
        assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
    }
}
