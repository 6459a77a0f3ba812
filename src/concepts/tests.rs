use super::*;

#[test]
fn test_absent_and_empty_input() {
    assert!(extract_concepts(None).is_empty());
    assert!(extract_concepts("").is_empty());
    assert!(extract_concepts("   \n ").is_empty());
}

#[test]
fn test_three_letter_words_need_lower_threshold() {
    let text = "the cat sat on the cat mat cat";

    // Default extraction only keeps words longer than three characters
    assert!(extract_concepts(text).is_empty());

    let concepts = ConceptExtractor::new().with_min_word_len(3).extract(text);
    assert_eq!(concepts, vec!["cat", "sat", "mat"]);
}

#[test]
fn test_orders_by_descending_frequency() {
    let text = "graph nodes graph edges graph nodes weights";
    assert_eq!(extract_concepts(text), vec!["graph", "nodes", "edges", "weights"]);
}

#[test]
fn test_ties_keep_first_occurrence_order() {
    let text = "zebra apple mango apple zebra mango";
    assert_eq!(extract_concepts(text), vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_lowercases_and_strips_symbols() {
    let text = "Photosynthesis! photosynthesis? (Chlorophyll) chloro-phyll";
    let table = ConceptExtractor::new().frequency_table(text);

    assert_eq!(table.count("photosynthesis"), 2);
    assert_eq!(table.count("chlorophyll"), 2);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_excludes_stop_words_and_numbers() {
    let text = "there would 2024 12345 about which mitochondria 3.14159";
    assert_eq!(extract_concepts(text), vec!["mitochondria"]);
}

#[test]
fn test_limits_to_fifteen() {
    let text = (0..40)
        .map(|i| format!("concept{}", char::from(b'a' + (i % 26) as u8)))
        .collect::<Vec<_>>()
        .join(" ");
    let concepts = extract_concepts(text.as_str());
    assert_eq!(concepts.len(), DEFAULT_CONCEPT_LIMIT);
}

#[test]
fn test_custom_limit() {
    let text = "alpha beta gamma delta alpha";
    let concepts = ConceptExtractor::new().with_limit(2).extract(text);
    assert_eq!(concepts, vec!["alpha", "beta"]);
}

#[test]
fn test_deterministic() {
    let text = "neuron synapse neuron axon dendrite synapse cortex neuron glia";
    assert_eq!(extract_concepts(text), extract_concepts(text));
}

#[test]
fn test_unicode_words() {
    let text = "Über über Straße café café café";
    assert_eq!(extract_concepts(text), vec!["café", "über", "straße"]);
}

#[test]
fn test_ranked_counts() {
    let table = ConceptExtractor::new().frequency_table("delta delta omega");
    assert_eq!(table.ranked(), vec![("delta", 2), ("omega", 1)]);
    assert!(!table.is_empty());
    assert_eq!(table.count("missing"), 0);
}

#[test]
fn test_stop_word_lookup() {
    assert!(stopwords::is_stop_word("the"));
    assert!(stopwords::is_stop_word("which"));
    assert!(!stopwords::is_stop_word("cat"));
}
