//! Aggregate statistics over an analysis run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::question::QuizQuestion;

/// Counts and averages describing one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Number of questions analyzed.
    pub total_questions: usize,
    /// Questions at or above the correctness threshold.
    pub well_answered_count: usize,
    /// Questions below the correctness threshold.
    pub wrong_answered_count: usize,
    /// `words_analyzed / total_questions`, rounded to two decimals.
    pub average_words_per_question: f64,
    /// Number of words passed in.
    pub words_analyzed: usize,
}

/// Compute summary statistics.
///
/// The caller decides how `well` and `wrong` partition `all` and which
/// words make up `all_words`; they are counted as given. Zero questions
/// yields an average of `0.0`.
pub fn summarize<S: AsRef<str>>(
    all: &[QuizQuestion],
    well: &[QuizQuestion],
    wrong: &[QuizQuestion],
    all_words: &[S],
) -> AnalysisSummary {
    let total_questions = all.len();
    let words_analyzed = all_words.len();
    let average = if total_questions > 0 {
        words_analyzed as f64 / total_questions as f64
    } else {
        0.0
    };

    AnalysisSummary {
        total_questions,
        well_answered_count: well.len(),
        wrong_answered_count: wrong.len(),
        average_words_per_question: round2(average),
        words_analyzed,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, percent_correct: f64) -> QuizQuestion {
        QuizQuestion::new(text, percent_correct)
    }

    #[test]
    fn balanced_groups() {
        let well = vec![q("question one", 0.8), q("question two", 0.6)];
        let wrong = vec![q("question three", 0.3), q("question four", 0.4)];
        let all: Vec<_> = well.iter().chain(&wrong).cloned().collect();
        let words = [
            "question", "one", "question", "two", "question", "three", "question", "four",
        ];

        let summary = summarize(&all, &well, &wrong, &words);

        assert_eq!(summary.total_questions, 4);
        assert_eq!(summary.well_answered_count, 2);
        assert_eq!(summary.wrong_answered_count, 2);
        assert_eq!(summary.words_analyzed, 8);
        assert_eq!(summary.average_words_per_question, 2.0);
    }

    #[test]
    fn only_well_answered() {
        let all = vec![q("test question", 0.8), q("another test", 0.9)];
        let words = ["test", "question", "another", "test"];

        let summary = summarize(&all, &all, &[], &words);

        assert_eq!(summary.total_questions, 2);
        assert_eq!(summary.well_answered_count, 2);
        assert_eq!(summary.wrong_answered_count, 0);
        assert_eq!(summary.words_analyzed, 4);
        assert_eq!(summary.average_words_per_question, 2.0);
    }

    #[test]
    fn only_wrong_answered() {
        let all = vec![q("difficult question", 0.3), q("hard question", 0.2)];
        let words = ["difficult", "question", "hard", "question"];

        let summary = summarize(&all, &[], &all, &words);

        assert_eq!(summary.well_answered_count, 0);
        assert_eq!(summary.wrong_answered_count, 2);
        assert_eq!(summary.average_words_per_question, 2.0);
    }

    #[test]
    fn fractional_average() {
        let all = vec![q("one two", 0.8), q("three", 0.6)];
        let summary = summarize(&all, &all, &[], &["one", "two", "three"]);
        assert_eq!(summary.average_words_per_question, 1.5);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let all = vec![q("a", 0.8), q("b", 0.6), q("c", 0.1)];
        let summary = summarize(&all, &all[..2], &all[2..], &["x", "y"]);
        assert_eq!(summary.average_words_per_question, 0.67);

        let summary = summarize(&all, &all[..2], &all[2..], &["x", "y", "z", "w"]);
        assert_eq!(summary.average_words_per_question, 1.33);
    }

    #[test]
    fn no_questions_means_zero_average() {
        let words: [&str; 0] = [];
        let summary = summarize(&[], &[], &[], &words);
        assert_eq!(summary.total_questions, 0);
        assert_eq!(summary.average_words_per_question, 0.0);

        let summary = summarize(&[], &[], &[], &["orphan"]);
        assert_eq!(summary.words_analyzed, 1);
        assert_eq!(summary.average_words_per_question, 0.0);
    }

    #[test]
    fn is_idempotent() {
        let all = vec![q("one", 0.8), q("two three", 0.6), q("four five six", 0.3)];
        let words = ["one", "two", "three", "four", "five", "six"];
        let first = summarize(&all, &all[..2], &all[2..], &words);
        let second = summarize(&all, &all[..2], &all[2..], &words);
        assert_eq!(first, second);
        assert_eq!(first.average_words_per_question, 2.0);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let summary = summarize(&[q("x", 1.0)], &[q("x", 1.0)], &[], &["word"]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalQuestions"], 1);
        assert_eq!(json["averageWordsPerQuestion"], 1.0);
    }
}
