use crate::models::domain::QuestionsConfig;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Two-question reply in the format the exam prompt asks for
    pub const EXAM_REPLY: &str = "Questão 1: Qual processo transforma água líquida em vapor?
Tipo: Múltipla escolha
a) Condensação
b) Evaporação
c) Precipitação
Gabarito: B
Explicação: A evaporação ocorre quando a água absorve calor.

Questão 2: Explique a importância da transpiração das plantas no ciclo da água.
Tipo: Discursiva
Gabarito: Devolve vapor à atmosfera.
Explicação: A transpiração complementa a evaporação.";

    pub fn exam_config() -> QuestionsConfig {
        QuestionsConfig {
            total_questions: 2,
            multiple_choice: 1,
            discursive: 1,
            true_false: 0,
            curricular_code: None,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::question_parser::process_questions;

    #[test]
    fn test_fixtures_exam_reply_parses() {
        let questions = process_questions(EXAM_REPLY);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question_type, "Múltipla escolha");
        assert_eq!(questions[0].answer, "B");
        assert!(questions[0].statement.contains("b) Evaporação"));
        assert_eq!(questions[1].explanation, "A transpiração complementa a evaporação.");
    }

    #[test]
    fn test_fixtures_exam_config_is_consistent() {
        let config = exam_config();
        assert_eq!(config.mix_total(), config.total_questions);
    }
}
