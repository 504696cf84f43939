//! Case-insensitive substring filter over the raw record sequence.

use crate::store::Record;

/// Select the records whose `word` contains `term` as a case-insensitive
/// substring, preserving original relative order.
///
/// An empty term returns a full copy of the input; an empty result is a
/// valid outcome, not an error. Lowering is locale-agnostic (Unicode simple
/// case folding via `str::to_lowercase`).
#[must_use]
pub fn filter_records(raw: &[Record], term: &str) -> Vec<Record> {
    if term.is_empty() {
        return raw.to_vec();
    }
    let needle = term.to_lowercase();
    raw.iter()
        .filter(|r| r.word.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Record> {
        vec![
            Record::new("the", 100),
            Record::new("Cat", 50),
            Record::new("dog", 50),
            Record::new("catalog", 12),
        ]
    }

    #[test]
    fn empty_term_returns_full_copy() {
        let raw = fixture();
        let filtered = filter_records(&raw, "");
        assert_eq!(filtered, raw);
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let raw = fixture();
        let filtered = filter_records(&raw, "CAT");
        let words: Vec<&str> = filtered.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["Cat", "catalog"]);
    }

    #[test]
    fn substring_match_preserves_relative_order() {
        let raw = fixture();
        let filtered = filter_records(&raw, "o");
        let words: Vec<&str> = filtered.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["dog", "catalog"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let raw = fixture();
        assert!(filter_records(&raw, "zebra").is_empty());
    }

    #[test]
    fn empty_dataset_filters_to_empty() {
        assert!(filter_records(&[], "cat").is_empty());
        assert!(filter_records(&[], "").is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let raw = fixture();
        let before = raw.clone();
        let _ = filter_records(&raw, "cat");
        assert_eq!(raw, before);
    }
}
