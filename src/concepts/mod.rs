//! Frequency-based keyword extraction used to seed concept graphs.

mod stopwords;

#[cfg(test)]
mod tests;

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use stopwords::is_stop_word;

/// Maximum number of concepts returned by [`extract_concepts`]
pub const DEFAULT_CONCEPT_LIMIT: usize = 15;

/// Shortest word (in characters) counted as a concept
///
/// Three-letter words such as "cat" are dropped by default; use
/// [`ConceptExtractor::with_min_word_len`] with `3` to keep them.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

static SYMBOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid symbol regex (verified by tests)"));

/// Top concepts of `text` by descending frequency
///
/// Ties keep first-occurrence order, so identical input always gives
/// identical output. Absent or empty input yields no concepts.
///
/// # Example
///
/// ```
/// use noteweave::extract_concepts;
///
/// let concepts = extract_concepts("Rust ownership, borrowing and more ownership rules");
/// assert_eq!(concepts[0], "ownership");
/// ```
pub fn extract_concepts<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    ConceptExtractor::new().extract(text)
}

/// Configurable keyword extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptExtractor {
    limit: usize,
    min_word_len: usize,
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONCEPT_LIMIT,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

impl ConceptExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of concepts to return
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Shortest accepted word length, in characters
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    pub fn extract<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<String> {
        let table = self.frequency_table(text);
        let concepts = table.top(self.limit);
        debug!(
            "Extracted {} concepts from {} distinct words",
            concepts.len(),
            table.len()
        );
        concepts
    }

    /// Count every accepted word of `text`
    pub fn frequency_table<'a>(&self, text: impl Into<Option<&'a str>>) -> ConceptFrequencyTable {
        let mut table = ConceptFrequencyTable::default();
        let Some(text) = text.into() else {
            return table;
        };

        let lowered = text.to_lowercase();
        let cleaned = SYMBOL_REGEX.replace_all(&lowered, "");

        for word in cleaned.split_whitespace() {
            if self.accepts(word) {
                table.record(word);
            }
        }
        table
    }

    fn accepts(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_len
            && !is_stop_word(word)
            && !word.chars().all(char::is_numeric)
    }
}

/// Occurrence counts for one extraction call
#[derive(Debug, Clone, Default)]
pub struct ConceptFrequencyTable {
    /// word -> (count, first occurrence position)
    counts: HashMap<String, (usize, usize)>,
}

impl ConceptFrequencyTable {
    fn record(&mut self, word: &str) {
        let next_position = self.counts.len();
        self.counts
            .entry(word.to_string())
            .or_insert((0, next_position))
            .0 += 1;
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).map(|&(count, _)| count).unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All words with their counts, most frequent first
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize, usize)> = self
            .counts
            .iter()
            .map(|(word, &(count, first))| (word.as_str(), count, first))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries
            .into_iter()
            .map(|(word, count, _)| (word, count))
            .collect()
    }

    /// The `n` most frequent words
    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}
