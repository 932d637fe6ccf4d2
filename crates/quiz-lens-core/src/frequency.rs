//! Word frequency counting.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Word → occurrence count, remembering the order words were first seen.
///
/// Keys are case-sensitive. Iteration follows first-insertion order, which
/// is what gives ranking a reproducible tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `word`, if it was seen.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Set the count for `word`.
    ///
    /// An existing word keeps its position; a new word goes last.
    pub fn insert(&mut self, word: impl Into<String>, count: usize) {
        let word = word.into();
        if let Some(&i) = self.index.get(&word) {
            self.entries[i].1 = count;
        } else {
            self.index.insert(word.clone(), self.entries.len());
            self.entries.push((word, count));
        }
    }

    /// Add one occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        if let Some(&i) = self.index.get(word) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, count) in iter {
            map.insert(word, count);
        }
        map
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Count occurrences of each word.
///
/// Empty and whitespace-only entries are skipped, so this is safe to call on
/// sequences that did not come from the tokenizer.
#[tracing::instrument(level = "trace", skip_all, fields(words = words.len()))]
pub fn count_words<S: AsRef<str>>(words: &[S]) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for word in words {
        let word = word.as_ref();
        if !word.trim().is_empty() {
            freq.increment(word);
        }
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_words() {
        let freq = count_words(&["hello", "world", "hello", "test", "world", "hello"]);
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get("hello"), Some(3));
        assert_eq!(freq.get("world"), Some(2));
        assert_eq!(freq.get("test"), Some(1));
    }

    #[test]
    fn single_repeated_word() {
        let freq = count_words(&["hello", "hello", "hello"]);
        assert_eq!(freq.iter().collect::<Vec<_>>(), vec![("hello", 3)]);
    }

    #[test]
    fn skips_blank_entries() {
        let freq = count_words(&["hello", "", "world", "  ", "test"]);
        assert_eq!(
            freq.iter().collect::<Vec<_>>(),
            vec![("hello", 1), ("world", 1), ("test", 1)]
        );
        assert_eq!(freq.total(), 3);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let freq = count_words(&["Hello", "hello", "HELLO"]);
        assert_eq!(freq.get("Hello"), Some(1));
        assert_eq!(freq.get("hello"), Some(1));
        assert_eq!(freq.get("HELLO"), Some(1));
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let words: Vec<String> = Vec::new();
        let freq = count_words(&words);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn total_matches_non_blank_input() {
        let words = ["a", "b", " ", "a", "", "c", "\t", "a"];
        let blanks = words.iter().filter(|w| w.trim().is_empty()).count();
        let freq = count_words(&words);
        assert_eq!(freq.total(), words.len() - blanks);
        for (word, count) in freq.iter() {
            assert_eq!(count, words.iter().filter(|w| **w == word).count());
        }
    }

    #[test]
    fn iteration_follows_first_sighting() {
        let freq = count_words(&["b", "a", "b", "c", "a"]);
        let order: Vec<_> = freq.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut freq: FrequencyMap = [("x", 1), ("y", 2)].into_iter().collect();
        freq.insert("x", 9);
        freq.insert("z", 4);
        assert_eq!(
            freq.iter().collect::<Vec<_>>(),
            vec![("x", 9), ("y", 2), ("z", 4)]
        );
    }

    #[test]
    fn serializes_as_ordered_object() {
        let freq = count_words(&["zeta", "alpha", "zeta"]);
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"zeta":2,"alpha":1}"#);
    }
}
