//! Boundary with the collaborators that turn files and media into text.
//!
//! Extractors hand the chunker a single string; transcript sources hand it
//! timestamped segments that can bypass chunking altogether.

mod error;
mod fallback;
mod metadata;
mod plain;
mod registry;
mod transcript;


pub use error::ExtractError;
pub use fallback::{FallbackChain, TranscriptSource};
pub use metadata::{ExtractedText, SourceKind, SourceMetadata};
pub use plain::PlainTextExtractor;
pub use registry::ExtractorRegistry;
pub use transcript::{TranscriptSegment, render_transcript, segments_as_chunks};

/// Turns the raw bytes of a named source into text
pub trait Extractor: Send + Sync {
    /// Extract text from a source
    ///
    /// # Arguments
    /// * `name` - File name or other identifier (e.g., "lecture-03.txt")
    /// * `bytes` - Raw source contents
    ///
    /// # Returns
    /// The text plus metadata, or the reason nothing usable was found
    fn extract(&self, name: &str, bytes: &[u8]) -> Result<ExtractedText, ExtractError>;
}
