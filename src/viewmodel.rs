//! Boundary payloads for the view collaborator.
//!
//! The view collaborator may insert text into markup unsafely, so `word`
//! text is neutralized here, at the boundary — core invariants never depend
//! on it.

#![allow(missing_docs)]

use serde::Serialize;

use crate::query::{Page, Summary};

/// One renderable row of the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    /// Markup-escaped word text.
    pub word: String,
    pub count: u64,
    /// Count with thousands separators, ready for display.
    pub count_display: String,
}

/// Payload for every list re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub items: Vec<WordRow>,
    pub page: usize,
    pub total_pages: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl PageView {
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self {
            items: page
                .items
                .iter()
                .map(|r| WordRow {
                    word: escape_markup(&r.word),
                    count: r.count,
                    count_display: group_thousands(u128::from(r.count)),
                })
                .collect(),
            page: page.page,
            total_pages: page.total_pages,
            can_prev: page.can_go_prev(),
            can_next: page.can_go_next(),
        }
    }
}

/// Payload for the stats panel, pushed once per load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_records: String,
    pub total_occurrences: String,
    pub unique_words: String,
    /// Markup-escaped top word (or the dataset-empty sentinel).
    pub top_word: String,
}

impl StatsView {
    #[must_use]
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            total_records: group_thousands(summary.total_records as u128),
            total_occurrences: group_thousands(summary.total_occurrences),
            unique_words: group_thousands(summary.unique_words as u128),
            top_word: escape_markup(&summary.top_word),
        }
    }
}

/// Neutralize markup-significant characters in untrusted word text.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Group digits with thousands separators (`1234567` → `1,234,567`).
#[must_use]
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
