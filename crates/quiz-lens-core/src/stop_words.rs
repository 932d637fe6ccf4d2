//! Built-in English stop words.
//!
//! Function words that carry no topical signal and are dropped before
//! frequency counting. The list is closed; callers extend it through
//! [`TokenizerBuilder::extra_stop_words`](crate::tokenizer::TokenizerBuilder::extra_stop_words)
//! rather than by mutating it.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The built-in stop words, in their canonical (lowercase) form.
pub const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "be", "been", "to", "of",
    "in", "on", "for", "with", "as", "at", "by", "from", "that", "this", "it", "its", "your", "you",
    "we", "they", "their", "our", "i", "what", "which", "who", "whom", "how", "why", "when",
    "where", "can", "could", "should", "would", "may", "might", "will", "shall", "do", "does",
    "did",
];

/// Set view over [`STOP_WORD_LIST`] for membership checks.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Whether `word` is a built-in stop word.
///
/// Membership is case-insensitive.
pub fn is_stop_word(word: &str) -> bool {
    if STOP_WORDS.contains(word) {
        return true;
    }
    word.chars().any(char::is_uppercase) && STOP_WORDS.contains(word.to_lowercase().as_str())
}
