//! Top-word selection.
//!
//! Filters a [`FrequencyMap`] by a minimum count, ranks what remains by
//! descending count, and truncates to a limit. Ties keep the map's
//! first-insertion order (the sort is stable).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyMap;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

impl WordCount {
    /// Create a word count.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Named selection settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Preset {
    /// Top 3 words, no frequency floor.
    #[default]
    Compact,
    /// Top 10 words seen at least 3 times.
    Detailed,
}

impl Preset {
    /// Returns the preset name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Detailed => "detailed",
        }
    }

    /// The selection settings this preset stands for.
    pub const fn options(self) -> TopWordsOptions {
        match self {
            Self::Compact => TopWordsOptions {
                min_frequency: 1,
                limit: 3,
            },
            Self::Detailed => TopWordsOptions {
                min_frequency: 3,
                limit: 10,
            },
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many words to keep and how frequent they must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopWordsOptions {
    /// Words seen fewer times than this are dropped.
    pub min_frequency: usize,
    /// Maximum number of words returned.
    pub limit: usize,
}

impl Default for TopWordsOptions {
    fn default() -> Self {
        Preset::default().options()
    }
}

impl From<Preset> for TopWordsOptions {
    fn from(preset: Preset) -> Self {
        preset.options()
    }
}

impl TopWordsOptions {
    /// Override the minimum frequency.
    pub const fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Override the limit.
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Apply optional overrides on top of these settings.
    pub fn overridden(self, min_frequency: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            min_frequency: min_frequency.unwrap_or(self.min_frequency),
            limit: limit.unwrap_or(self.limit),
        }
    }
}

/// Select the most frequent words.
///
/// Keeps entries with `count >= min_frequency`, sorts them by descending
/// count (stable, so equal counts stay in first-seen order), and returns at
/// most `limit` of them.
#[tracing::instrument(level = "trace", skip(freq), fields(distinct = freq.len()))]
pub fn top_words(freq: &FrequencyMap, options: TopWordsOptions) -> Vec<WordCount> {
    if freq.is_empty() || options.limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<WordCount> = freq
        .iter()
        .filter(|(_, count)| *count >= options.min_frequency)
        .map(|(word, count)| WordCount::new(word, count))
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(options.limit);
    ranked
}
