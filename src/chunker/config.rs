use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid chunking config: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// How text longer than the chunk size is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingMode {
    /// Prefer blank lines, headings, chapter labels and timestamps
    #[default]
    Boundary,
    /// Plain fixed-size windows over the whole text
    Fixed,
}

/// Caller-facing chunking parameters
///
/// Values are taken as given and corrected by [`ChunkingConfig::resolve`]
/// at the start of every chunking call, so an out-of-range config never
/// fails a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters
    pub chunk_size: usize,
    /// Trailing characters of one chunk repeated at the start of the next
    pub overlap: usize,
    pub mode: ChunkingMode,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            mode: ChunkingMode::default(),
        }
    }
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            mode: ChunkingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ChunkingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse a JSON config such as `{"chunk_size": 800, "overlap": -5}`
    ///
    /// Missing fields take their defaults. Negative numbers are accepted and
    /// corrected the same way as any other out-of-range value.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawChunkingConfig = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Apply the defaulting and clamping rules
    ///
    /// - `chunk_size == 0` falls back to [`DEFAULT_CHUNK_SIZE`]
    /// - `overlap >= chunk_size` is clamped to `chunk_size / 2` in
    ///   [`ChunkingMode::Boundary`] and to `chunk_size - 1` in
    ///   [`ChunkingMode::Fixed`]
    ///
    /// The result always satisfies `overlap < chunk_size`.
    pub fn resolve(&self) -> ResolvedConfig {
        let chunk_size = if self.chunk_size == 0 {
            debug!(
                "chunk_size 0 is not usable, falling back to {}",
                DEFAULT_CHUNK_SIZE
            );
            DEFAULT_CHUNK_SIZE
        } else {
            self.chunk_size
        };

        let overlap = if self.overlap >= chunk_size {
            let clamped = match self.mode {
                ChunkingMode::Boundary => chunk_size / 2,
                ChunkingMode::Fixed => chunk_size - 1,
            };
            debug!(
                "overlap {} does not fit chunk_size {}, clamped to {}",
                self.overlap, chunk_size, clamped
            );
            clamped
        } else {
            self.overlap
        };

        ResolvedConfig {
            chunk_size,
            overlap,
            mode: self.mode,
        }
    }
}

/// Chunking parameters after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub chunk_size: usize,
    pub overlap: usize,
    pub mode: ChunkingMode,
}

impl ResolvedConfig {
    /// Distance between the starts of consecutive fixed-size windows
    pub fn step(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

/// Wire shape of a config file; signed so negative values survive parsing
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawChunkingConfig {
    chunk_size: i64,
    overlap: i64,
    mode: ChunkingMode,
}

impl Default for RawChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE as i64,
            overlap: DEFAULT_OVERLAP as i64,
            mode: ChunkingMode::default(),
        }
    }
}

impl From<RawChunkingConfig> for ChunkingConfig {
    fn from(raw: RawChunkingConfig) -> Self {
        Self {
            chunk_size: usize::try_from(raw.chunk_size).unwrap_or(0),
            overlap: usize::try_from(raw.overlap).unwrap_or(0),
            mode: raw.mode,
        }
    }
}
