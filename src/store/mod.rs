//! RecordStore: ownership of the immutable raw dataset.
//!
//! The snapshot is loaded exactly once at startup and frozen afterwards;
//! re-ingestion replaces it wholesale. Malformed or unreachable input is
//! reported as a coded load error, never as a bare low-level error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::DataFormat;
use crate::core::errors::{LexError, Result};

/// A single word/count pair from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The word, case-preserved as stored.
    pub word: String,
    /// Occurrence count.
    pub count: u64,
}

impl Record {
    /// Construct a record. Intended for fixtures and ingestion; the word is
    /// expected to be non-empty (ingestion enforces this).
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The raw ordered record collection, frozen after load.
///
/// Order is as delivered by the data source. Upstream emits the collection
/// pre-sorted by count descending, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetSnapshot {
    records: Vec<Record>,
}

impl DatasetSnapshot {
    /// Wrap an already-validated record sequence.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read-only view of the raw records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Owner of the current snapshot.
#[derive(Debug, Default)]
pub struct RecordStore {
    snapshot: DatasetSnapshot,
}

impl RecordStore {
    /// Start with an empty snapshot (pre-load state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &DatasetSnapshot {
        &self.snapshot
    }

    /// Replace the snapshot wholesale. The only permitted update after load.
    pub fn replace(&mut self, snapshot: DatasetSnapshot) {
        self.snapshot = snapshot;
    }

    /// Load a snapshot file in the given format.
    pub fn load_file(path: &Path, format: DataFormat) -> Result<DatasetSnapshot> {
        let text = fs::read_to_string(path).map_err(|e| LexError::fetch(path, e))?;
        match format {
            DataFormat::Json => Self::parse_json(&text),
            DataFormat::Tsv => Ok(Self::parse_tsv(&text)),
        }
    }

    /// Parse a JSON array of `{word, count}` objects.
    ///
    /// Records with an empty `word` are rejected: the snapshot contract
    /// requires non-empty words, and a producer emitting them is malformed.
    pub fn parse_json(text: &str) -> Result<DatasetSnapshot> {
        let records: Vec<Record> =
            serde_json::from_str(text).map_err(|e| LexError::DataParse {
                context: "json",
                details: e.to_string(),
            })?;
        if let Some(position) = records.iter().position(|r| r.word.is_empty()) {
            return Err(LexError::DataParse {
                context: "json",
                details: format!("record {position} has an empty word"),
            });
        }
        Ok(DatasetSnapshot::from_records(records))
    }

    /// Parse upstream tab-separated output: one `word<TAB>count` per line.
    ///
    /// Mirrors the upstream converter: unparseable lines are skipped rather
    /// than rejected, and the surviving records are sorted by count
    /// descending before snapshotting.
    #[must_use]
    pub fn parse_tsv(text: &str) -> DatasetSnapshot {
        let mut records: Vec<Record> = text
            .lines()
            .filter_map(|line| {
                let mut parts = line.splitn(2, '\t');
                let word = parts.next()?.trim();
                let count = parts.next()?.trim().parse::<u64>().ok()?;
                if word.is_empty() {
                    return None;
                }
                Some(Record::new(word, count))
            })
            .collect();
        records.sort_by(|a, b| b.count.cmp(&a.count));
        DatasetSnapshot::from_records(records)
    }
}
