use serde::{Deserialize, Serialize};

/// Type label used when a block carries no `Tipo:` line.
pub const UNSPECIFIED_TYPE: &str = "Não especificado";

/// An exam question extracted from free text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub number: String, // label as written in the source, never renumbered
    #[serde(rename = "type")]
    pub question_type: String,
    pub statement: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Wraps a whole text as a single untyped question.
    pub fn whole_text(text: &str) -> Self {
        Question {
            number: "1".to_string(),
            question_type: UNSPECIFIED_TYPE.to_string(),
            statement: text.trim().to_string(),
            answer: String::new(),
            explanation: String::new(),
        }
    }
}
