//! Request shape handed to the downstream generation service.

use serde::{Deserialize, Serialize};

/// What the consumer is asked to work on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenerationInput {
    /// Plain text, typically one chunk
    Text { content: String },
    /// An encoded document the consumer reads itself
    Document { content: String, mime_type: String },
}

/// One generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub input: GenerationInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl GenerationRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            input: GenerationInput::Text {
                content: content.into(),
            },
            instructions: None,
        }
    }

    pub fn document(content: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            input: GenerationInput::Document {
                content: content.into(),
                mime_type: mime_type.into(),
            },
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// One text request per chunk, in chunk order
    pub fn for_chunks(chunks: &[String], instructions: Option<&str>) -> Vec<Self> {
        chunks
            .iter()
            .map(|chunk| {
                let request = Self::text(chunk.as_str());
                match instructions {
                    Some(text) => request.with_instructions(text),
                    None => request,
                }
            })
            .collect()
    }

    pub fn content(&self) -> &str {
        match &self.input {
            GenerationInput::Text { content } | GenerationInput::Document { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_request_json_shape() {
        let request = GenerationRequest::text("chunk body");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({ "input": { "kind": "text", "content": "chunk body" } })
        );
    }

    #[test]
    fn test_document_request_json_shape() {
        let request = GenerationRequest::document("JVBERi0=", "application/pdf")
            .with_instructions("Summarize for revision");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "input": { "kind": "document", "content": "JVBERi0=", "mime_type": "application/pdf" },
                "instructions": "Summarize for revision"
            })
        );
    }

    #[test]
    fn test_parse_request_without_instructions() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"input": {"kind": "text", "content": "hi"}}"#).unwrap();
        assert_eq!(request, GenerationRequest::text("hi"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed: Result<GenerationRequest, _> =
            serde_json::from_str(r#"{"input": {"kind": "audio", "content": "hi"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_for_chunks_keeps_order() {
        let chunks = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let requests = GenerationRequest::for_chunks(&chunks, Some("Make quiz questions"));

        let contents: Vec<&str> = requests.iter().map(|r| r.content()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
        assert!(requests
            .iter()
            .all(|r| r.instructions.as_deref() == Some("Make quiz questions")));
    }
}
