//! Summary metrics over the raw dataset.
//!
//! Stats are computed from the raw snapshot only — they never reflect the
//! active search or sort.

#![allow(missing_docs)]

use std::collections::HashSet;

use serde::Serialize;

use crate::store::Record;

/// Sentinel shown when the dataset has no records.
pub const NO_TOP_WORD: &str = "-";

/// Summary metrics handed to the view once per load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_records: usize,
    /// Wide enough that no sum of u64 counts can overflow it.
    pub total_occurrences: u128,
    /// Distinct `word` values, case-sensitive, matching raw storage.
    /// Upstream emits one record per word, so this normally equals
    /// `total_records`; the distinct count is still computed rather than
    /// assumed.
    pub unique_words: usize,
    /// Literally the first record in raw order, NOT the maximum by count.
    /// The two coincide only because upstream pre-sorts by count descending.
    pub top_word: String,
}

/// Compute the load-time summary.
#[must_use]
pub fn summarize(raw: &[Record]) -> Summary {
    let unique: HashSet<&str> = raw.iter().map(|r| r.word.as_str()).collect();
    Summary {
        total_records: raw.len(),
        total_occurrences: raw.iter().map(|r| u128::from(r.count)).sum(),
        unique_words: unique.len(),
        top_word: raw
            .first()
            .map_or_else(|| NO_TOP_WORD.to_string(), |r| r.word.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_zeroes_everything() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.total_occurrences, 0);
        assert_eq!(summary.unique_words, 0);
        assert_eq!(summary.top_word, NO_TOP_WORD);
    }

    #[test]
    fn totals_and_top_word() {
        let raw = vec![Record::new("a", 5), Record::new("b", 3)];
        let summary = summarize(&raw);
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.total_occurrences, 8);
        assert_eq!(summary.unique_words, 2);
        assert_eq!(summary.top_word, "a");
    }

    #[test]
    fn top_word_is_first_in_raw_order_not_max() {
        let raw = vec![Record::new("small", 1), Record::new("huge", 999)];
        assert_eq!(summarize(&raw).top_word, "small");
    }

    #[test]
    fn unique_words_is_case_sensitive_distinct() {
        let raw = vec![
            Record::new("the", 10),
            Record::new("The", 4),
            Record::new("the", 1),
        ];
        let summary = summarize(&raw);
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.unique_words, 2);
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let raw = vec![
            Record::new("a", u64::MAX),
            Record::new("b", u64::MAX),
            Record::new("c", u64::MAX),
        ];
        let summary = summarize(&raw);
        assert_eq!(summary.total_occurrences, u128::from(u64::MAX) * 3);
    }
}
