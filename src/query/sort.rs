//! Field + direction ordering over a record view.

#![allow(missing_docs)]

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Which record field drives the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Word,
    #[default]
    Count,
}

/// Ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// A complete sort selection, e.g. `count-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Parse the `field-direction` form used by the sort selector
    /// (`count-desc`, `word-asc`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once('-')
            .ok_or_else(|| format!("expected field-direction, got {s:?}"))?;
        let field = match field {
            "word" => SortField::Word,
            "count" => SortField::Count,
            other => return Err(format!("unknown sort field {other:?}")),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(format!("unknown sort direction {other:?}")),
        };
        Ok(Self { field, direction })
    }
}

/// Reorder `view` in place by the given key. Membership is unchanged.
///
/// Word comparison is case-folded with the raw string as tiebreak, a
/// locale-agnostic stand-in for collation. The sort is stable, so records
/// with fully equal keys keep their relative order.
pub fn sort_records(view: &mut [Record], key: SortKey) {
    view.sort_by(|a, b| {
        let ordering = match key.field {
            SortField::Count => a.count.cmp(&b.count),
            SortField::Word => compare_words(&a.word, &b.word),
        };
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_words(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Record> {
        vec![
            Record::new("the", 100),
            Record::new("cat", 50),
            Record::new("dog", 50),
        ]
    }

    fn words(view: &[Record]) -> Vec<&str> {
        view.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn count_desc_orders_highest_first() {
        let mut view = vec![Record::new("a", 1), Record::new("b", 9), Record::new("c", 4)];
        sort_records(&mut view, SortKey::default());
        assert_eq!(words(&view), vec!["b", "c", "a"]);
    }

    #[test]
    fn count_asc_is_reverse_of_desc_in_count_order() {
        let mut asc = fixture();
        sort_records(&mut asc, SortKey::new(SortField::Count, SortDirection::Asc));
        let mut desc = fixture();
        sort_records(&mut desc, SortKey::new(SortField::Count, SortDirection::Desc));
        let asc_counts: Vec<u64> = asc.iter().map(|r| r.count).collect();
        let mut desc_counts: Vec<u64> = desc.iter().map(|r| r.count).collect();
        desc_counts.reverse();
        assert_eq!(asc_counts, desc_counts);
    }

    #[test]
    fn word_asc_orders_lexicographically() {
        let mut view = fixture();
        sort_records(&mut view, SortKey::new(SortField::Word, SortDirection::Asc));
        assert_eq!(words(&view), vec!["cat", "dog", "the"]);
    }

    #[test]
    fn word_comparison_folds_case() {
        let mut view = vec![Record::new("Banana", 1), Record::new("apple", 2)];
        sort_records(&mut view, SortKey::new(SortField::Word, SortDirection::Asc));
        assert_eq!(words(&view), vec!["apple", "Banana"]);
    }

    #[test]
    fn equal_counts_keep_relative_order() {
        let mut view = fixture();
        sort_records(&mut view, SortKey::new(SortField::Count, SortDirection::Asc));
        // cat and dog both have count 50; stable sort keeps cat before dog.
        assert_eq!(words(&view), vec!["cat", "dog", "the"]);
    }

    #[test]
    fn sort_changes_order_only() {
        let mut view = fixture();
        sort_records(&mut view, SortKey::new(SortField::Word, SortDirection::Desc));
        assert_eq!(view.len(), 3);
        for record in fixture() {
            assert!(view.contains(&record), "{record:?} must survive the sort");
        }
    }

    #[test]
    fn sort_key_parses_selector_values() {
        assert_eq!(
            "count-desc".parse::<SortKey>().unwrap(),
            SortKey::new(SortField::Count, SortDirection::Desc)
        );
        assert_eq!(
            "word-asc".parse::<SortKey>().unwrap(),
            SortKey::new(SortField::Word, SortDirection::Asc)
        );
        assert!("count".parse::<SortKey>().is_err());
        assert!("size-desc".parse::<SortKey>().is_err());
        assert!("word-sideways".parse::<SortKey>().is_err());
    }
}
