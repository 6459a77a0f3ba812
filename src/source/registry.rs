use super::{ExtractError, ExtractedText, Extractor, PlainTextExtractor};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Maximum source size accepted by default
const DEFAULT_MAX_SOURCE_BYTES: u64 = 50 * 1024 * 1024; // 50 MB

/// Dispatch table from file extension to extractor
///
/// Built and owned by the caller; there is no process-wide registry.
pub struct ExtractorRegistry {
    /// Used when no extension-specific extractor exists
    fallback: Box<dyn Extractor>,
    /// Extension -> Extractor mapping
    map: HashMap<String, Box<dyn Extractor>>,
    max_source_bytes: u64,
}

impl ExtractorRegistry {
    /// Create a new registry with PlainTextExtractor as fallback
    pub fn new() -> Self {
        Self {
            fallback: Box::new(PlainTextExtractor),
            map: HashMap::new(),
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }

    /// Reject sources larger than `size` bytes before extracting them
    pub fn max_source_bytes(mut self, size: u64) -> Self {
        self.max_source_bytes = size;
        self
    }

    /// Register an extractor for a specific file extension
    ///
    /// # Arguments
    /// * `extension` - File extension without dot (e.g., "pdf", "vtt")
    /// * `extractor` - Extractor implementation
    pub fn register(&mut self, extension: impl Into<String>, extractor: impl Extractor + 'static) {
        self.map
            .insert(extension.into().to_lowercase(), Box::new(extractor));
    }

    /// Select the extractor for a given source name
    ///
    /// Falls back to PlainTextExtractor if no extension-specific extractor exists
    pub fn select(&self, name: &str) -> &dyn Extractor {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        self.map.get(&ext).map(|e| &**e).unwrap_or(&*self.fallback)
    }

    /// Check the size limit, then extract with the selected extractor
    pub fn extract(&self, name: &str, bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
        let size = bytes.len() as u64;
        if size > self.max_source_bytes {
            return Err(ExtractError::TooLarge {
                size,
                max: self.max_source_bytes,
            });
        }

        let extracted = self.select(name).extract(name, bytes)?;
        debug!(
            "Extracted {} bytes of text from {} ({} pages)",
            extracted.text.len(),
            name,
            extracted.page_breaks.len() + 1
        );
        Ok(extracted)
    }

    /// Number of registered extractors (excluding fallback)
    pub fn extractor_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered extensions
    pub fn registered_extensions(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
