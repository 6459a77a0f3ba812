use serde::Serialize;
use tracing::{debug, trace};

use super::boundary::split_sections;
use super::config::{ChunkingConfig, ChunkingMode, ResolvedConfig};
use crate::normalizer::{normalize, word_count};

/// Placed between a carried-over tail and the section that follows it
const SECTION_SEPARATOR: &str = "\n\n";

/// A bounded piece of text ready for a size-limited consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position in reading order, starting at 1
    pub index: usize,
    /// The chunk content
    pub text: String,
    /// Length of `text` in characters
    pub char_count: usize,
    /// Whitespace-separated words in `text`
    pub word_count: usize,
    /// Which path of the chunker produced this chunk
    pub origin: ChunkOrigin,
}

impl Chunk {
    fn new(index: usize, text: String, origin: ChunkOrigin) -> Self {
        Self {
            index,
            char_count: text.chars().count(),
            word_count: word_count(&text),
            text,
            origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkOrigin {
    /// The input fit in a single chunk
    Whole,
    /// Accumulated from whole sections
    Boundary,
    /// Cut from a fixed-size window
    Slice,
}

/// Split `text` into ordered chunk strings
///
/// Shorthand for [`Chunker::chunk`] when the metadata is not needed.
///
/// # Example
///
/// ```
/// use noteweave::{chunk, ChunkingConfig};
///
/// let chunks = chunk(&"A".repeat(3000), &ChunkingConfig::new(1200, 200));
/// let lengths: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
/// assert_eq!(lengths, vec![1200, 1200, 1000]);
/// ```
pub fn chunk(text: &str, config: &ChunkingConfig) -> Vec<String> {
    Chunker::new(*config)
        .chunk(text)
        .into_iter()
        .map(|c| c.text)
        .collect()
}

/// Boundary-aware chunker
///
/// Pure and synchronous; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Normalize raw extracted text, then chunk it
    pub fn chunk_document(&self, raw: &str) -> Vec<Chunk> {
        self.chunk(&normalize(raw))
    }

    /// Chunk already-normalized text
    ///
    /// Empty or whitespace-only input yields no chunks. Input that fits in
    /// one chunk is returned unchanged as a single chunk.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let config = self.config.resolve();

        if text.trim().is_empty() {
            return Vec::new();
        }

        let total_chars = text.chars().count();
        if total_chars <= config.chunk_size {
            return vec![Chunk::new(1, text.to_string(), ChunkOrigin::Whole)];
        }

        let pieces = match config.mode {
            ChunkingMode::Boundary => chunk_by_sections(text, &config),
            ChunkingMode::Fixed => slice_windows(text, &config),
        };

        debug!(
            "Chunked {} chars into {} chunks (size={}, overlap={}, mode={:?})",
            total_chars,
            pieces.len(),
            config.chunk_size,
            config.overlap,
            config.mode
        );

        pieces
            .into_iter()
            .enumerate()
            .map(|(i, (text, origin))| Chunk::new(i + 1, text, origin))
            .collect()
    }
}

/// Greedily pack sections into chunks, subdividing any section that is
/// too large on its own
fn chunk_by_sections(text: &str, config: &ResolvedConfig) -> Vec<(String, ChunkOrigin)> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0;

    for section in split_sections(text) {
        let section_chars = section.chars().count();

        if buffer_chars + section_chars <= config.chunk_size {
            buffer.push_str(section);
            buffer_chars += section_chars;
            continue;
        }

        let flushed = flush(&mut chunks, &buffer);

        if section_chars > config.chunk_size {
            trace!(
                "Section of {} chars exceeds chunk size {}, slicing",
                section_chars,
                config.chunk_size
            );
            chunks.extend(slice_windows(section, config));
            buffer.clear();
        } else {
            buffer = match chunks.last() {
                Some((previous, _)) if flushed => carry_over(previous, section, config),
                _ => section.to_string(),
            };
        }
        buffer_chars = buffer.chars().count();
    }

    flush(&mut chunks, &buffer);
    chunks
}

/// Push the trimmed buffer as a chunk; returns false when there was
/// nothing to push
fn flush(chunks: &mut Vec<(String, ChunkOrigin)>, buffer: &str) -> bool {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return false;
    }
    chunks.push((trimmed.to_string(), ChunkOrigin::Boundary));
    true
}

/// Start a new buffer with the tail of the previous chunk
///
/// The tail is shortened (down to nothing) when the full overlap would
/// push the new buffer past the chunk size.
fn carry_over(previous: &str, section: &str, config: &ResolvedConfig) -> String {
    let body = section.trim_start();
    if body.is_empty() {
        return String::new();
    }

    let body_chars = body.chars().count();
    let budget = config
        .chunk_size
        .saturating_sub(body_chars + SECTION_SEPARATOR.len());
    let take = config.overlap.min(budget);
    if take == 0 {
        return body.to_string();
    }

    format!("{}{}{}", char_tail(previous, take), SECTION_SEPARATOR, body)
}

/// The last `n` characters of `text`
fn char_tail(text: &str, n: usize) -> &str {
    let skip = text.chars().count().saturating_sub(n);
    text.char_indices()
        .nth(skip)
        .map(|(i, _)| &text[i..])
        .unwrap_or("")
}

/// Cut `text` into windows of at most `chunk_size` characters
///
/// Each window prefers to end just before the last whitespace character
/// at or before its size limit. The next window starts `overlap`
/// characters before the previous one ended, so consecutive windows share
/// their overlap and no text between them is skipped. A window only snaps
/// to whitespace lying more than `overlap` characters past its start,
/// which keeps every step strictly positive.
fn slice_windows(text: &str, config: &ResolvedConfig) -> Vec<(String, ChunkOrigin)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let total = chars.len();
    let byte_at = |i: usize| chars.get(i).map(|&(b, _)| b).unwrap_or(text.len());

    let mut windows = Vec::new();
    let mut start = 0;

    while start < total {
        let hard_end = (start + config.chunk_size).min(total);
        let end = if hard_end < total {
            snap_to_whitespace(&chars, start + config.overlap, hard_end)
        } else {
            hard_end
        };

        let window = text[byte_at(start)..byte_at(end)].trim();
        if !window.is_empty() {
            windows.push((window.to_string(), ChunkOrigin::Slice));
        }

        if end >= total {
            break;
        }
        start = end - config.overlap;
    }

    windows
}

/// Last index in `(floor, hard_end]` holding whitespace, or `hard_end`
fn snap_to_whitespace(chars: &[(usize, char)], floor: usize, hard_end: usize) -> usize {
    (floor + 1..=hard_end)
        .rev()
        .find(|&i| chars[i].1.is_whitespace())
        .unwrap_or(hard_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(chunk_size: usize, overlap: usize) -> ResolvedConfig {
        ChunkingConfig::new(chunk_size, overlap).resolve()
    }

    #[test]
    fn test_char_tail() {
        assert_eq!(char_tail("abcdef", 3), "def");
        assert_eq!(char_tail("abc", 10), "abc");
        assert_eq!(char_tail("abc", 0), "");
        assert_eq!(char_tail("héllo", 4), "éllo");
    }

    #[test]
    fn test_slice_windows_hard_cut() {
        let windows = slice_windows("abcdefghij01234", &resolved(10, 5));
        let texts: Vec<&str> = windows.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["abcdefghij", "fghij01234"]);
    }

    #[test]
    fn test_slice_windows_snaps_to_word_boundary() {
        let windows = slice_windows("alpha beta gamma delta", &resolved(12, 2));
        let texts: Vec<&str> = windows.iter().map(|(t, _)| t.as_str()).collect();
        // "alpha beta g" snaps back to the space before "gamma"
        assert_eq!(texts[0], "alpha beta");
        assert!(texts.iter().all(|t| t.chars().count() <= 12));
        assert!(texts.last().is_some_and(|t| t.ends_with("delta")));
    }

    #[test]
    fn test_slice_windows_multibyte() {
        let text = "é".repeat(25);
        let windows = slice_windows(&text, &resolved(10, 0));
        let lengths: Vec<usize> = windows.iter().map(|(t, _)| t.chars().count()).collect();
        assert_eq!(lengths, vec![10, 10, 5]);
    }

    #[test]
    fn test_carry_over_shrinks_to_fit() {
        let config = resolved(20, 10);
        let buffer = carry_over("previous chunk text", "\n\nnew section body", &config);
        // 16 chars of body + 2 separator leaves room for 2 tail chars
        assert_eq!(buffer, "xt\n\nnew section body");
        assert!(buffer.chars().count() <= 20);
    }

    #[test]
    fn test_carry_over_whitespace_section() {
        assert_eq!(carry_over("previous", "\n\n  ", &resolved(20, 5)), "");
    }
}
