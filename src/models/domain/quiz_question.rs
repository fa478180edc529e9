use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizQuestionOption>, // generation order, not shuffled
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuizQuestion {
    pub fn correct_options(&self) -> impl Iterator<Item = &QuizQuestionOption> {
        self.options.iter().filter(|o| o.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_option_uses_camel_case_flag() {
        let option = QuizQuestionOption {
            id: "q1-a".to_string(),
            text: "Alternativa".to_string(),
            is_correct: true,
        };

        let json = serde_json::to_value(&option).expect("option should serialize");
        assert_eq!(json["isCorrect"], true);
        assert!(json.get("is_correct").is_none());
    }

    #[test]
    fn quiz_question_accepts_missing_explanation() {
        let question: QuizQuestion = serde_json::from_str(
            r#"{"id":"q1","text":"?","options":[{"id":"a","text":"A","isCorrect":true}]}"#,
        )
        .expect("question should deserialize");

        assert_eq!(question.explanation, "");
        assert_eq!(question.correct_options().count(), 1);
    }

    #[test]
    fn quiz_question_preserves_option_order_and_multiple_correct() {
        let question = QuizQuestion {
            id: "q-1".to_string(),
            text: "Pick".to_string(),
            options: vec![
                QuizQuestionOption {
                    id: "b".to_string(),
                    text: "B".to_string(),
                    is_correct: true,
                },
                QuizQuestionOption {
                    id: "a".to_string(),
                    text: "A".to_string(),
                    is_correct: true,
                },
            ],
            explanation: String::new(),
        };

        let ids: Vec<&str> = question.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(question.correct_options().count(), 2);
    }
}
