//! Question analysis pipeline.
//!
//! Partitions questions by correctness, runs each group through
//! tokenize → count → rank, and summarizes the run. Each stage is a pure
//! function in its own module; [`analyze_questions`] only wires them up.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::count_words;
use crate::question::{self, QuizQuestion};
use crate::ranking::{TopWordsOptions, WordCount, top_words};
use crate::summary::{AnalysisSummary, summarize};
use crate::tokenizer::Tokenizer;

/// Correctness rate at or above which a question counts as well answered.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Settings for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisOptions {
    /// Inclusive lower bound for "well answered".
    pub threshold: f64,
    /// Top-word selection applied to each group.
    pub selection: TopWordsOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            selection: TopWordsOptions::default(),
        }
    }
}

impl AnalysisOptions {
    /// Check that the threshold is a rate in `0.0..=1.0`.
    pub fn validate(&self) -> AnalysisResult<()> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(AnalysisError::InvalidThreshold(self.threshold))
        }
    }
}

/// Ranked words for each group plus run statistics.
///
/// The default value (two empty lists, no summary) is what a caller shows
/// before anything has been analyzed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    /// Top words among well-answered questions.
    pub well_answered: Vec<WordCount>,
    /// Top words among wrong-answered questions.
    pub wrong_answered: Vec<WordCount>,
    /// Run statistics; absent when there was nothing to analyze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AnalysisSummary>,
}

impl QuestionAnalysis {
    /// Whether no analysis was performed.
    pub const fn is_empty(&self) -> bool {
        self.summary.is_none()
    }
}

/// Tokenized words of a question group, in question order.
pub fn group_words(tokenizer: &Tokenizer, questions: &[QuizQuestion]) -> Vec<String> {
    if questions.is_empty() {
        return Vec::new();
    }
    tokenizer.tokenize(&question::joined_text(questions))
}

/// Analyze a question set.
///
/// An empty set performs no work and returns [`QuestionAnalysis::default`].
/// The summary counts every question, and its word total covers the
/// tokenized text of both groups.
#[tracing::instrument(skip_all, fields(questions = questions.len(), threshold = options.threshold))]
pub fn analyze_questions(
    questions: &[QuizQuestion],
    tokenizer: &Tokenizer,
    options: &AnalysisOptions,
) -> QuestionAnalysis {
    if questions.is_empty() {
        tracing::debug!("no questions to analyze");
        return QuestionAnalysis::default();
    }

    let (well, wrong) = question::partition(questions, options.threshold);
    tracing::debug!(
        well_answered = well.len(),
        wrong_answered = wrong.len(),
        "partitioned questions"
    );

    let well_words = group_words(tokenizer, &well);
    let wrong_words = group_words(tokenizer, &wrong);

    let well_answered = top_words(&count_words(&well_words), options.selection);
    let wrong_answered = top_words(&count_words(&wrong_words), options.selection);

    let all_words: Vec<&str> = well_words
        .iter()
        .chain(&wrong_words)
        .map(String::as_str)
        .collect();
    let summary = summarize(questions, &well, &wrong, &all_words);

    tracing::info!(
        total = summary.total_questions,
        words = summary.words_analyzed,
        "analysis complete"
    );

    QuestionAnalysis {
        well_answered,
        wrong_answered,
        summary: Some(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Preset;

    fn repeated(text: &str, rate: f64, times: usize) -> Vec<QuizQuestion> {
        (0..times).map(|_| QuizQuestion::new(text, rate)).collect()
    }

    fn run_default(questions: &[QuizQuestion]) -> QuestionAnalysis {
        analyze_questions(questions, &Tokenizer::default(), &AnalysisOptions::default())
    }

    fn detailed() -> AnalysisOptions {
        AnalysisOptions {
            selection: Preset::Detailed.options(),
            ..AnalysisOptions::default()
        }
    }

    #[test]
    fn separates_topics_by_group() {
        let mut questions = repeated("climate change affects global temperatures", 0.7, 3);
        questions.extend(repeated("economic growth impacts market stability", 0.3, 3));

        let result = analyze_questions(&questions, &Tokenizer::default(), &detailed());

        let well: Vec<_> = result.well_answered.iter().map(|w| w.word.as_str()).collect();
        for word in ["climate", "change", "affects", "global", "temperatures"] {
            assert!(well.contains(&word), "well answered missing {word}");
        }
        let wrong: Vec<_> = result.wrong_answered.iter().map(|w| w.word.as_str()).collect();
        for word in ["economic", "growth", "impacts", "market", "stability"] {
            assert!(wrong.contains(&word), "wrong answered missing {word}");
        }
        assert!(result.well_answered.iter().all(|w| w.count == 3));
        assert!(result.wrong_answered.iter().all(|w| w.count == 3));

        let summary = result.summary.unwrap();
        assert_eq!(summary.total_questions, 6);
        assert_eq!(summary.well_answered_count, 3);
        assert_eq!(summary.wrong_answered_count, 3);
        assert_eq!(summary.words_analyzed, 30);
        assert_eq!(summary.average_words_per_question, 5.0);
    }

    #[test]
    fn compact_preset_returns_top_three() {
        let questions = vec![
            QuizQuestion::new("apple banana apple", 0.8),
            QuizQuestion::new("banana orange apple", 0.2),
        ];

        let result = run_default(&questions);

        assert_eq!(
            result.well_answered,
            vec![WordCount::new("apple", 2), WordCount::new("banana", 1)]
        );
        assert_eq!(
            result.wrong_answered,
            vec![
                WordCount::new("banana", 1),
                WordCount::new("orange", 1),
                WordCount::new("apple", 1),
            ]
        );
    }

    #[test]
    fn frequency_floor_can_empty_both_groups() {
        let questions = vec![
            QuizQuestion::new("apple banana", 0.8),
            QuizQuestion::new("orange grape", 0.2),
        ];

        let result = analyze_questions(&questions, &Tokenizer::default(), &detailed());

        assert!(result.well_answered.is_empty());
        assert!(result.wrong_answered.is_empty());
        assert!(result.summary.is_some());
    }

    #[test]
    fn half_correct_is_well_answered() {
        let questions = vec![QuizQuestion::new("boundary condition", 0.5)];

        let result = run_default(&questions);

        assert_eq!(result.well_answered.len(), 2);
        assert!(result.wrong_answered.is_empty());
        let summary = result.summary.unwrap();
        assert_eq!(summary.well_answered_count, 1);
        assert_eq!(summary.wrong_answered_count, 0);
    }

    #[test]
    fn empty_input_performs_no_work() {
        let result = run_default(&[]);
        assert_eq!(result, QuestionAnalysis::default());
        assert!(result.is_empty());
    }

    #[test]
    fn blank_text_contributes_nothing() {
        let questions = vec![QuizQuestion::new("", 0.9), QuizQuestion::new("   ", 0.1)];

        let result = run_default(&questions);

        assert!(result.well_answered.is_empty());
        assert!(result.wrong_answered.is_empty());
        let summary = result.summary.unwrap();
        assert_eq!(summary.total_questions, 2);
        assert_eq!(summary.words_analyzed, 0);
        assert_eq!(summary.average_words_per_question, 0.0);
    }

    #[test]
    fn group_counts_always_sum_to_total() {
        let questions: Vec<_> = (0..20)
            .map(|i| QuizQuestion::new(format!("topic{i} shared"), f64::from(i) / 19.0))
            .collect();
        for threshold in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let options = AnalysisOptions {
                threshold,
                ..AnalysisOptions::default()
            };
            let summary = analyze_questions(&questions, &Tokenizer::default(), &options)
                .summary
                .unwrap();
            assert_eq!(
                summary.well_answered_count + summary.wrong_answered_count,
                summary.total_questions
            );
        }
    }

    #[test]
    fn custom_threshold_moves_questions() {
        let questions = vec![QuizQuestion::new("borderline item", 0.6)];
        let options = AnalysisOptions {
            threshold: 0.75,
            ..AnalysisOptions::default()
        };

        let result = analyze_questions(&questions, &Tokenizer::default(), &options);

        assert!(result.well_answered.is_empty());
        assert_eq!(result.wrong_answered.len(), 2);
    }

    #[test]
    fn group_words_joins_questions_in_order() {
        let questions = vec![
            QuizQuestion::new("Market stability?", 0.2),
            QuizQuestion::new("The market fell", 0.2),
        ];
        assert_eq!(
            group_words(&Tokenizer::default(), &questions),
            vec!["market", "stability", "market", "fell"]
        );
        assert!(group_words(&Tokenizer::default(), &[]).is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let options = AnalysisOptions {
                threshold,
                ..AnalysisOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(AnalysisError::InvalidThreshold(_))
            ));
        }
        assert!(AnalysisOptions::default().validate().is_ok());
    }

    #[test]
    fn default_serializes_without_summary() {
        let json = serde_json::to_value(QuestionAnalysis::default()).unwrap();
        assert_eq!(json["wellAnswered"], serde_json::json!([]));
        assert!(json.get("summary").is_none());
    }
}
