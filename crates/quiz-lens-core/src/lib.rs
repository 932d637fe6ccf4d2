//! Core library for quiz-lens.
//!
//! Finds the words that characterize well-answered and wrong-answered quiz
//! questions. The pipeline is pure and synchronous:
//!
//! 1. [`question::partition`] splits questions around a correctness threshold
//! 2. [`tokenizer::Tokenizer`] turns each group's text into filtered words
//! 3. [`frequency::count_words`] counts them
//! 4. [`ranking::top_words`] keeps the most frequent ones
//! 5. [`summary::summarize`] reports totals and averages
//!
//! [`analysis::analyze_questions`] runs all of it.
//!
//! # Modules
//!
//! - [`analysis`] - The full pipeline and its options
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`frequency`] - Word counting
//! - [`question`] - Question records and the JSON loader
//! - [`ranking`] - Top-word selection and presets
//! - [`stop_words`] - The built-in stop-word list
//! - [`summary`] - Run statistics
//! - [`tokenizer`] - Text normalization
//!
//! # Quick Start
//!
//! ```
//! use quiz_lens_core::{AnalysisOptions, Tokenizer, analyze_questions, parse_questions};
//!
//! let questions = parse_questions(
//!     r#"[{"text": "Which planet is largest?", "percent_correct": 0.9},
//!         {"text": "Name the largest moon of Saturn", "percent_correct": 0.2}]"#,
//! )
//! .unwrap();
//!
//! let result = analyze_questions(&questions, &Tokenizer::default(), &AnalysisOptions::default());
//! assert_eq!(result.well_answered[0].word, "planet");
//! assert_eq!(result.summary.unwrap().total_questions, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod frequency;
pub mod question;
pub mod ranking;
pub mod stop_words;
pub mod summary;
pub mod tokenizer;

pub use analysis::{AnalysisOptions, QuestionAnalysis, analyze_questions};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{FrequencyMap, count_words};
pub use question::{QuizQuestion, parse_questions};
pub use ranking::{Preset, TopWordsOptions, WordCount, top_words};
pub use summary::{AnalysisSummary, summarize};
pub use tokenizer::{Tokenizer, tokenize};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
