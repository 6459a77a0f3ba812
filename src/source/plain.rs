use super::{ExtractError, ExtractedText, Extractor, SourceMetadata};

const FORM_FEED: char = '\u{0C}';

/// Fallback extractor for plain text and anything unrecognized
///
/// Valid UTF-8 is passed through. Other bytes are reduced to their
/// printable ASCII. Form feeds mark page breaks and become blank lines.
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, name: &str, bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
        let mut metadata = SourceMetadata::from_name_and_bytes(name, bytes);

        let raw = if metadata.is_utf8 {
            String::from_utf8_lossy(bytes).into_owned()
        } else {
            Self::extract_printable(bytes)
        };

        let (text, page_breaks) = Self::split_pages(&raw);
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyText(name.to_string()));
        }

        metadata.set_line_count(text.lines().count());

        Ok(ExtractedText {
            text,
            metadata,
            page_breaks,
        })
    }
}

impl PlainTextExtractor {
    /// Extract printable ASCII from binary data
    fn extract_printable(bytes: &[u8]) -> String {
        bytes
            .iter()
            .filter(|&&b| b.is_ascii_graphic() || b.is_ascii_whitespace())
            .map(|&b| b as char)
            .collect()
    }

    /// Replace form feeds with paragraph breaks, recording where each new
    /// page starts
    fn split_pages(raw: &str) -> (String, Vec<usize>) {
        let mut text = String::with_capacity(raw.len());
        let mut page_breaks = Vec::new();

        for (i, page) in raw.split(FORM_FEED).enumerate() {
            if i > 0 {
                text.push_str("\n\n");
                page_breaks.push(text.len());
            }
            text.push_str(page);
        }

        (text, page_breaks)
    }
}
