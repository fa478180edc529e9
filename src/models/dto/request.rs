use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionsConfig},
    services::prompt_builder::QualityContext,
};

/// Question mix as sent by clients: counts arrive as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsConfigDto {
    pub total_questions: Option<String>,
    pub multiple_choice: Option<String>,
    pub discursive: Option<String>,
    pub true_false: Option<String>,
    pub curricular_code: Option<String>,
}

fn parse_count(field: &str, value: Option<&str>) -> AppResult<Option<u32>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse::<u32>().map(Some).map_err(|_| {
            AppError::ValidationError(format!(
                "{} must be a non-negative integer, got '{}'",
                field, raw
            ))
        }),
    }
}

impl TryFrom<QuestionsConfigDto> for QuestionsConfig {
    type Error = AppError;

    fn try_from(dto: QuestionsConfigDto) -> AppResult<Self> {
        let multiple_choice =
            parse_count("multiple_choice", dto.multiple_choice.as_deref())?.unwrap_or(0);
        let discursive = parse_count("discursive", dto.discursive.as_deref())?.unwrap_or(0);
        let true_false = parse_count("true_false", dto.true_false.as_deref())?.unwrap_or(0);
        let mix_total = multiple_choice
            .checked_add(discursive)
            .and_then(|sum| sum.checked_add(true_false))
            .ok_or_else(|| AppError::ValidationError("question mix is too large".to_string()))?;

        let total_questions =
            parse_count("total_questions", dto.total_questions.as_deref())?.unwrap_or(mix_total);

        if total_questions == 0 {
            return Err(AppError::ValidationError(
                "total_questions must be greater than zero".to_string(),
            ));
        }
        if mix_total > total_questions {
            return Err(AppError::ValidationError(format!(
                "question mix ({}) exceeds total_questions ({})",
                mix_total, total_questions
            )));
        }

        Ok(QuestionsConfig {
            total_questions,
            multiple_choice,
            discursive,
            true_false,
            curricular_code: dto
                .curricular_code
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateExamQuestionsRequest {
    #[serde(default)]
    pub session_id: String,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,

    #[serde(default)]
    pub config: QuestionsConfigDto,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub session_id: String,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,

    #[serde(default = "default_true")]
    pub use_smart_difficulty: bool,

    #[serde(default)]
    pub use_study_mode: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportQuestionsRequest {
    #[validate(length(min = 1, message = "at least one question is required"))]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QualityPromptRequest {
    #[validate(length(min = 1, max = 64))]
    pub activity_type: String,

    pub context: QualityContext,

    pub batch_index: Option<usize>,

    pub batch_total: Option<usize>,

    #[serde(default)]
    pub previous_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BnccSkillsQuery {
    #[validate(length(min = 1))]
    pub component: String,

    #[validate(length(min = 1))]
    pub grade: String,

    #[validate(range(min = 1, max = 20))]
    pub limit: Option<usize>,
}
