//! Error types for quiz-lens-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur before or around question analysis.
///
/// The pipeline itself never fails; these cover the boundaries feeding it.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The question document could not be parsed.
    #[error("invalid question data: {0}")]
    InvalidQuestions(#[from] serde_json::Error),

    /// The correctness threshold is outside `0.0..=1.0`.
    #[error("threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
