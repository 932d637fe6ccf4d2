//! Text normalization into candidate words.
//!
//! Tokenizing lowercases the text, deletes every character that is not an
//! ASCII letter, ASCII digit, or whitespace, splits on whitespace, and then
//! drops short tokens and stop words. The byte order mark U+FEFF counts as
//! whitespace, so a stray BOM between words separates them.
//!
//! Deleted characters do not act as separators: `"hello-world"` becomes
//! `"helloworld"` and `"test@example.com"` becomes `"testexamplecom"`.
//! Downstream reports rely on this, so it is kept deliberately.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::stop_words;

/// Characters removed before splitting.
static STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s\x{FEFF}]+").expect("valid regex"));

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Minimum token length kept by the default tokenizer.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Stop-word and length filtering settings, fixed at construction.
///
/// The built-in stop words are always applied; extra words from
/// configuration are layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    min_word_length: usize,
    extra_stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            extra_stop_words: HashSet::new(),
        }
    }
}

impl Tokenizer {
    /// Start building a tokenizer from the defaults.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    /// A tokenizer that keeps single-character tokens.
    ///
    /// Only empty tokens and stop words are dropped.
    pub fn raw() -> Self {
        Self {
            min_word_length: 1,
            ..Self::default()
        }
    }

    /// Shortest token length that survives filtering.
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Whether `word` is filtered as a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        stop_words::is_stop_word(word)
            || self.extra_stop_words.contains(word)
            || self.extra_stop_words.contains(&word.to_lowercase())
    }

    /// Split `text` into filtered, lowercased words in appearance order.
    #[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len()))]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let stripped = STRIP_PATTERN.replace_all(&lowered, "");

        stripped
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .filter(|word| word.len() >= self.min_word_length && !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }
}

/// Builder for [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct TokenizerBuilder {
    min_word_length: usize,
    extra_stop_words: HashSet<String>,
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            extra_stop_words: HashSet::new(),
        }
    }
}

impl TokenizerBuilder {
    /// Set the minimum token length. Zero behaves like one.
    pub const fn min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Add stop words on top of the built-in list.
    ///
    /// Words are lowercased and trimmed; blank entries are ignored.
    pub fn extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Finish building.
    pub fn build(self) -> Tokenizer {
        Tokenizer {
            min_word_length: self.min_word_length.max(1),
            extra_stop_words: self.extra_stop_words,
        }
    }
}

/// Tokenize with the default settings.
///
/// Shorthand for `Tokenizer::default().tokenize(text)`.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
