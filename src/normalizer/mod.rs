//! Whitespace normalization applied before any chunking or extraction.
//!
//! Normalized text has no runs of spaces or tabs, uses `\n\n` as the only
//! paragraph separator, and carries no leading or trailing whitespace.
//! Any whitespace between newlines (form feeds, NBSP, ideographic space)
//! counts as part of a paragraph break.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid space-run regex (verified by tests)"));

static PARAGRAPH_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(?:[^\S\n]*\n)+").expect("valid paragraph-break regex (verified by tests)")
});

/// Normalize raw extracted text
///
/// Accepts either a `&str` or an `Option<&str>`; absent input yields an
/// empty string. The result is a fixed point: normalizing it again returns
/// the same string.
///
/// # Example
///
/// ```
/// use noteweave::normalize;
///
/// assert_eq!(normalize("a   b\n\n\n\nc"), "a b\n\nc");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let unified = unify_line_endings(text);
    let spaced = SPACE_RUNS.replace_all(&unified, " ");
    let paragraphs = PARAGRAPH_BREAKS.replace_all(&spaced, "\n\n");

    paragraphs.trim().to_string()
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn unify_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
