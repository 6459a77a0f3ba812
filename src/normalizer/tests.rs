use super::*;

#[test]
fn test_collapses_spaces_and_paragraphs() {
    assert_eq!(normalize("a   b\n\n\n\nc"), "a b\n\nc");
}

#[test]
fn test_absent_and_empty_input() {
    assert_eq!(normalize(None), "");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \n\t\n  "), "");
}

#[test]
fn test_tabs_become_single_space() {
    assert_eq!(normalize("one\t\ttwo \t three"), "one two three");
}

#[test]
fn test_blank_lines_with_whitespace_collapse() {
    assert_eq!(normalize("para one\n  \n\t\n \npara two"), "para one\n\npara two");
}

#[test]
fn test_single_newline_is_kept() {
    assert_eq!(normalize("line one\nline two"), "line one\nline two");
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(normalize("first\r\n\r\n\r\nsecond\rthird"), "first\n\nsecond\nthird");
}

#[test]
fn test_trims_edges() {
    assert_eq!(normalize("\n\n  hello world  \n\n"), "hello world");
}

#[test]
fn test_idempotent_on_samples() {
    let samples = [
        "a   b\n\n\n\nc",
        " x \n \n y ",
        "# Heading\n\n\n\tbody  text\r\n\r\nmore",
        "trailing space \n\nnext",
        "\u{a0}nbsp edges\u{a0}",
    ];

    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(once.as_str()), once, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_word_count() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("one two\n\nthree"), 3);
    assert_eq!(word_count("  spaced   out  "), 2);
}

#[test]
fn test_unicode_and_control_whitespace_in_blank_lines() {
    assert_eq!(normalize("a\n\u{3000}\nb"), "a\n\nb");
    assert_eq!(normalize("a\n\u{0c}\n\nb"), "a\n\nb");
    assert_eq!(normalize("a\n\u{a0}\n\n\nb"), "a\n\nb");
    assert_eq!(normalize("a\n\u{0b} \t\u{0c}\nb"), "a\n\nb");
}

#[test]
fn test_form_feed_page_break_becomes_boundary() {
    let text = format!("{}\n\u{0c}\n{}", "x".repeat(80), "y".repeat(80));
    let chunks = crate::Chunker::new(crate::ChunkingConfig::new(100, 0)).chunk_document(&text);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "x".repeat(80));
    assert_eq!(chunks[1].text, "y".repeat(80));
}
