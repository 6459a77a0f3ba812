use regex::Regex;
use std::iter;
use std::sync::LazyLock;

/// Places where a section may start
///
/// - two or more newlines
/// - a markdown heading of level 1 to 3
/// - a line starting with `Chapter` or `Section`
/// - a line containing a `[H:MM]` or `H:MM` timestamp (cut at line start)
static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)\n{2,}|^#{1,3}[ \t]|^(?:Chapter|Section)[ \t]|^[^\n]*?\[?\b\d{1,2}:\d{2}\b\]?",
    )
    .expect("valid boundary regex (verified by tests)")
});

/// Split text into sections, keeping every delimiter
///
/// Each section begins at a boundary match and runs to the next one.
/// Whitespace-only pieces are folded into the following section (or the
/// last one, at the end of the text), so concatenating the result always
/// reproduces `text` exactly.
pub(super) fn split_sections(text: &str) -> Vec<&str> {
    let cuts = BOUNDARY_REGEX
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&start| start > 0);

    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;

    for end in cuts.chain(iter::once(text.len())) {
        if end <= start {
            continue;
        }

        if text[start..end].trim().is_empty() {
            if end < text.len() {
                continue;
            }
            if let Some(last) = spans.last_mut() {
                last.1 = end;
                start = end;
                continue;
            }
        }

        spans.push((start, end));
        start = end;
    }

    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}
