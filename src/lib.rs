// Public API exports
pub mod chunker;
pub mod concepts;
pub mod normalizer;
pub mod request;
pub mod source;

// Re-export main types for convenience
pub use normalizer::{normalize, word_count};

pub use chunker::{
    Chunk, ChunkOrigin, Chunker, ChunkingConfig, ChunkingMode, ConfigError, DEFAULT_CHUNK_SIZE,
    DEFAULT_OVERLAP, ResolvedConfig, chunk,
};

pub use concepts::{ConceptExtractor, ConceptFrequencyTable, DEFAULT_CONCEPT_LIMIT, extract_concepts};

pub use source::{
    ExtractError, ExtractedText, Extractor, ExtractorRegistry, FallbackChain, PlainTextExtractor,
    SourceKind, SourceMetadata, TranscriptSegment, TranscriptSource, render_transcript,
    segments_as_chunks,
};

pub use request::{GenerationInput, GenerationRequest};
