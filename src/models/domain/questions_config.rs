use serde::Serialize;

/// Quantity and mix of questions requested from the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionsConfig {
    pub total_questions: u32,
    pub multiple_choice: u32,
    pub discursive: u32,
    pub true_false: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curricular_code: Option<String>,
}

impl QuestionsConfig {
    pub fn mix_total(&self) -> u32 {
        self.multiple_choice + self.discursive + self.true_false
    }
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        QuestionsConfig {
            total_questions: 5,
            multiple_choice: 3,
            discursive: 1,
            true_false: 1,
            curricular_code: None,
        }
    }
}
