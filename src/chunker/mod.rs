mod boundary;
mod config;
mod splitter;


pub use config::{ChunkingConfig, ChunkingMode, ConfigError, ResolvedConfig};
pub use splitter::{Chunk, ChunkOrigin, Chunker, chunk};

/// Maximum chunk length in characters when none (or zero) is configured
pub const DEFAULT_CHUNK_SIZE: usize = 1200;

/// Characters carried from one chunk into the next by default
pub const DEFAULT_OVERLAP: usize = 200;
