use serde_json::Value;
use thiserror::Error;

use crate::models::domain::{QuizQuestion, QuizQuestionOption};

pub const MIN_VALID_QUESTIONS: usize = 3;
pub const MIN_OPTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response JSON is not an array")]
    NotAnArray,

    #[error("only {valid} valid questions, need at least {min}", min = MIN_VALID_QUESTIONS)]
    TooFewValid { valid: usize },
}

/// Returns the text between the first `[` and the last `]`, inclusive.
pub fn json_array_slice(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (start < end).then(|| &raw[start..=end])
}

fn non_empty_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Only JSON objects count as options; anything else invalidates the element.
fn option_from_value(value: &Value) -> Option<QuizQuestionOption> {
    let map = value.as_object()?;
    Some(QuizQuestionOption {
        id: non_empty_id(map.get("id")).unwrap_or_default(),
        text: map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        is_correct: map
            .get("isCorrect")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

/// Keeps an element only if it has an id, a text and at least three usable options.
fn question_from_value(value: &Value) -> Option<QuizQuestion> {
    let id = non_empty_id(value.get("id"))?;
    let text = value
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())?
        .to_string();

    let raw_options = value.get("options")?.as_array()?;
    if raw_options.len() < MIN_OPTIONS {
        return None;
    }
    let options = raw_options
        .iter()
        .map(option_from_value)
        .collect::<Option<Vec<_>>>()?;

    let explanation = value
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(QuizQuestion {
        id,
        text,
        options,
        explanation,
    })
}

/// Parses a quiz reply into validated questions.
///
/// Invalid elements are dropped, never repaired. Fewer than
/// [`MIN_VALID_QUESTIONS`] survivors rejects the whole reply.
pub fn parse_quiz_response(raw: &str) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let json_text = json_array_slice(raw).unwrap_or(raw);

    let parsed: Value = serde_json::from_str(json_text)
        .map_err(|e| QuizParseError::InvalidJson(e.to_string()))?;
    let elements = parsed.as_array().ok_or(QuizParseError::NotAnArray)?;

    let valid: Vec<QuizQuestion> = elements.iter().filter_map(question_from_value).collect();
    if elements.len() != valid.len() {
        log::debug!(
            "Dropped {} of {} quiz elements during validation",
            elements.len() - valid.len(),
            elements.len()
        );
    }

    if valid.len() < MIN_VALID_QUESTIONS {
        return Err(QuizParseError::TooFewValid { valid: valid.len() });
    }

    Ok(valid)
}
