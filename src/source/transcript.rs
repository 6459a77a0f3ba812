use serde::{Deserialize, Serialize};

use crate::chunker::{ChunkingConfig, chunk};
use crate::normalizer::normalize;

/// One timestamped piece of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Offset from the start of the recording, in seconds
    pub start_seconds: u32,
    pub content: String,
}

impl TranscriptSegment {
    pub fn new(start_seconds: u32, content: impl Into<String>) -> Self {
        Self {
            start_seconds,
            content: content.into(),
        }
    }

    /// `[m:ss]` below an hour, `[h:mm:ss]` from then on
    pub fn label(&self) -> String {
        let hours = self.start_seconds / 3600;
        let minutes = (self.start_seconds % 3600) / 60;
        let seconds = self.start_seconds % 60;

        if hours > 0 {
            format!("[{}:{:02}:{:02}]", hours, minutes, seconds)
        } else {
            format!("[{}:{:02}]", minutes, seconds)
        }
    }

    fn render(&self) -> Option<String> {
        let content = normalize(self.content.as_str());
        if content.is_empty() {
            return None;
        }
        Some(format!("{} {}", self.label(), content))
    }
}

/// Join segments into one text, one labelled segment per line
///
/// The labels are chunk boundaries, so the result can go through the
/// boundary-aware chunker when segments should be packed together.
pub fn render_transcript(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .filter_map(TranscriptSegment::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Use each segment directly as a chunk
///
/// Segments with no content are skipped. A segment longer than the chunk
/// size is chunked on its own so no unit exceeds the limit.
pub fn segments_as_chunks(segments: &[TranscriptSegment], config: &ChunkingConfig) -> Vec<String> {
    let limit = config.resolve().chunk_size;
    let mut chunks = Vec::with_capacity(segments.len());

    for unit in segments.iter().filter_map(TranscriptSegment::render) {
        if unit.chars().count() <= limit {
            chunks.push(unit);
        } else {
            chunks.extend(chunk(&unit, config));
        }
    }

    chunks
}
