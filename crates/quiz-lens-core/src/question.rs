//! Quiz question records and the JSON loader.
//!
//! Records come from an external source that is not always tidy, so
//! deserialization is forgiving: a missing or non-string `text` reads as
//! empty, a numeric string `percent_correct` is parsed, and anything else
//! that is not a number reads as `0.0`.
//! Only a document that is not a JSON array of objects is rejected.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalysisResult;

/// A quiz question and the share of respondents who answered it correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizQuestion {
    /// Question text.
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "String")]
    pub text: String,
    /// Correctness rate between 0.0 and 1.0.
    #[serde(default, deserialize_with = "lenient_rate")]
    #[schemars(with = "f64")]
    pub percent_correct: f64,
}

impl QuizQuestion {
    /// Create a question record.
    pub fn new(text: impl Into<String>, percent_correct: f64) -> Self {
        Self {
            text: text.into(),
            percent_correct,
        }
    }

    /// Whether the question meets `threshold` (inclusive).
    pub fn is_well_answered(&self, threshold: f64) -> bool {
        self.percent_correct >= threshold
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite())
            .unwrap_or(0.0),
        other => other.as_f64().unwrap_or(0.0),
    })
}

/// Parse a JSON array of question objects.
#[tracing::instrument(skip_all, fields(input_len = json.len()))]
pub fn parse_questions(json: &str) -> AnalysisResult<Vec<QuizQuestion>> {
    let questions: Vec<QuizQuestion> = serde_json::from_str(json)?;
    tracing::debug!(count = questions.len(), "parsed questions");
    Ok(questions)
}

/// Split questions into `(well_answered, wrong_answered)` around `threshold`.
///
/// A rate equal to the threshold counts as well answered. Input order is
/// preserved within each group.
pub fn partition(
    questions: &[QuizQuestion],
    threshold: f64,
) -> (Vec<QuizQuestion>, Vec<QuizQuestion>) {
    questions
        .iter()
        .cloned()
        .partition(|q| q.is_well_answered(threshold))
}

/// Join the text of `questions` with single spaces.
pub fn joined_text(questions: &[QuizQuestion]) -> String {
    questions
        .iter()
        .map(|q| q.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
