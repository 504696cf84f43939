//! Chart series building: a declarative description for an external
//! charting collaborator.
//!
//! The series is always derived from the first `limit` records of the RAW
//! snapshot, never the filtered/sorted view — the chart shows the global
//! ranking regardless of the active search.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Ranked limits the dashboard offers (top-20 and top-50 buttons).
pub const PERMITTED_CHART_LIMITS: [usize; 2] = [20, 50];

/// A ranked-cloud request renders as a bar chart capped at this many records.
pub const CLOUD_FALLBACK_LIMIT: usize = 20;

/// Requested visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChartMode {
    #[default]
    RankedBar,
    /// Requested but unimplemented; builds fall back to the bar shape.
    RankedCloud,
}

/// Declarative series handed to the chart collaborator, which does all the
/// drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Words, reversed so the highest-ranked entry renders at the top.
    pub categories: Vec<String>,
    /// Counts, in the same reversed order.
    pub values: Vec<u64>,
    /// Mode the collaborator should actually draw.
    pub display: ChartMode,
    /// Mode the user asked for.
    pub requested: ChartMode,
    /// True when the requested mode had no real implementation and the bar
    /// fallback was substituted. Observable so callers can log or badge it.
    pub degraded: bool,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Build a series from the first `limit` records of `raw`.
///
/// `RankedCloud` has no true implementation: the builder substitutes the bar
/// representation over the first [`CLOUD_FALLBACK_LIMIT`] of the subset and
/// sets `degraded` rather than silently changing the output shape. Pure —
/// the caller decides how to surface the degradation.
#[must_use]
pub fn build_series(raw: &[Record], limit: usize, mode: ChartMode) -> ChartSeries {
    let (effective_limit, display, degraded) = match mode {
        ChartMode::RankedBar => (limit, ChartMode::RankedBar, false),
        ChartMode::RankedCloud => (limit.min(CLOUD_FALLBACK_LIMIT), ChartMode::RankedBar, true),
    };
    let subset = &raw[..effective_limit.min(raw.len())];
    ChartSeries {
        categories: subset.iter().rev().map(|r| r.word.clone()).collect(),
        values: subset.iter().rev().map(|r| r.count).collect(),
        display,
        requested: mode,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("w{i}"), 1000 - i as u64))
            .collect()
    }

    #[test]
    fn bar_series_takes_first_limit_reversed() {
        let raw = fixture(30);
        let series = build_series(&raw, 20, ChartMode::RankedBar);
        assert_eq!(series.len(), 20);
        // Reversed: last category is the top-ranked record.
        assert_eq!(series.categories.last().unwrap(), "w0");
        assert_eq!(series.categories.first().unwrap(), "w19");
        assert_eq!(*series.values.last().unwrap(), 1000);
        assert!(!series.degraded);
        assert_eq!(series.display, ChartMode::RankedBar);
    }

    #[test]
    fn limit_beyond_dataset_takes_everything() {
        let raw = fixture(5);
        let series = build_series(&raw, 50, ChartMode::RankedBar);
        assert_eq!(series.len(), 5);
    }

    #[test]
    fn empty_dataset_builds_empty_series() {
        let series = build_series(&[], 20, ChartMode::RankedBar);
        assert!(series.is_empty());
        assert!(!series.degraded);
    }

    #[test]
    fn cloud_request_falls_back_to_capped_bar() {
        let raw = fixture(40);
        let cloud = build_series(&raw, 50, ChartMode::RankedCloud);
        let bar = build_series(&raw, CLOUD_FALLBACK_LIMIT, ChartMode::RankedBar);
        assert_eq!(cloud.categories, bar.categories);
        assert_eq!(cloud.values, bar.values);
        assert_eq!(cloud.display, ChartMode::RankedBar);
        assert_eq!(cloud.requested, ChartMode::RankedCloud);
        assert!(cloud.degraded);
        assert!(!bar.degraded);
    }

    #[test]
    fn cloud_fallback_respects_smaller_requested_limit() {
        let raw = fixture(40);
        let series = build_series(&raw, 10, ChartMode::RankedCloud);
        assert_eq!(series.len(), 10);
        assert!(series.degraded);
    }

    #[test]
    fn series_ignores_record_order_assumptions() {
        // Raw order is whatever the source delivered; the builder slices it
        // as-is without re-ranking.
        let raw = vec![Record::new("low", 1), Record::new("high", 99)];
        let series = build_series(&raw, 2, ChartMode::RankedBar);
        assert_eq!(series.categories, vec!["high", "low"]);
        assert_eq!(series.values, vec![99, 1]);
    }
}
