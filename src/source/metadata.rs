use serde::Serialize;

/// Text produced by an extractor
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Extracted text, not yet normalized
    pub text: String,
    /// Source metadata and heuristics
    pub metadata: SourceMetadata,
    /// Byte offsets in `text` where a new page starts (first page excluded)
    pub page_breaks: Vec<usize>,
}

impl ExtractedText {
    /// Text of each page, in order
    pub fn pages(&self) -> Vec<&str> {
        let mut pages = Vec::with_capacity(self.page_breaks.len() + 1);
        let mut start = 0;
        for &brk in &self.page_breaks {
            pages.push(&self.text[start..brk]);
            start = brk;
        }
        pages.push(&self.text[start..]);
        pages
    }
}

/// Metadata gathered while extracting
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// Name the source was submitted under
    pub name: String,
    /// Lowercase extension without the dot (e.g., "md", "txt")
    pub extension: String,
    /// Coarse classification from the extension
    pub kind: SourceKind,
    /// Original byte size
    pub size_bytes: usize,
    /// Line count of the extracted text
    pub line_count: usize,
    /// Whether the bytes were valid UTF-8
    pub is_utf8: bool,
}

/// What kind of material a source holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain notes or prose
    Text,
    /// Markdown with headings
    Markdown,
    /// Captions or subtitles
    Transcript,
    /// Office or print documents
    Document,
    Unknown,
}

impl SourceMetadata {
    /// Create metadata from a source name and its bytes
    pub fn from_name_and_bytes(name: &str, bytes: &[u8]) -> Self {
        let extension = std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self {
            name: name.to_string(),
            kind: SourceKind::from_extension(&extension),
            extension,
            size_bytes: bytes.len(),
            line_count: 0, // set once the text is known
            is_utf8: std::str::from_utf8(bytes).is_ok(),
        }
    }

    pub fn set_line_count(&mut self, count: usize) {
        self.line_count = count;
    }
}

impl SourceKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "txt" | "text" | "log" => Self::Text,
            "md" | "markdown" | "mdx" => Self::Markdown,
            "vtt" | "srt" | "sbv" => Self::Transcript,
            "pdf" | "doc" | "docx" | "odt" | "rtf" | "pptx" => Self::Document,
            _ => Self::Unknown,
        }
    }
}
