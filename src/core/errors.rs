//! LXD-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, LexError>;

/// Top-level error type for lexidash.
///
/// A failed render capability (e.g. the ranked-cloud chart mode) is
/// deliberately NOT represented here: it is recovered locally by the chart
/// series builder and only surfaced through the event log.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("[LXD-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[LXD-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[LXD-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[LXD-2001] dataset fetch failure for {path}: {source}")]
    DataFetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[LXD-2002] dataset parse failure in {context}: {details}")]
    DataParse {
        context: &'static str,
        details: String,
    },

    #[error("[LXD-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[LXD-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[LXD-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl LexError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "LXD-1001",
            Self::MissingConfig { .. } => "LXD-1002",
            Self::ConfigParse { .. } => "LXD-1003",
            Self::DataFetch { .. } => "LXD-2001",
            Self::DataParse { .. } => "LXD-2002",
            Self::Serialization { .. } => "LXD-2101",
            Self::Io { .. } => "LXD-3002",
            Self::Runtime { .. } => "LXD-3900",
        }
    }

    /// Whether this error arose while ingesting the dataset snapshot.
    ///
    /// Load errors are fatal to entering the `Ready` state; the dashboard
    /// surfaces them and leaves every data view zeroed.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(self, Self::DataFetch { .. } | Self::DataParse { .. })
    }

    /// Convenience constructor for dataset fetch failures with a known path.
    #[must_use]
    pub fn fetch(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::DataFetch {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for LexError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for LexError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
