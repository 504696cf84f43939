//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use lexidash::prelude::*;
//! ```

// Core
pub use crate::core::config::{DashboardConfig, DataFormat};
pub use crate::core::errors::{LexError, Result};

// Store
pub use crate::store::{DatasetSnapshot, Record, RecordStore};

// Query pipeline
pub use crate::query::{
    Page, SortDirection, SortField, SortKey, Summary, filter_records, paginate, sort_records,
    summarize,
};

// Chart
pub use crate::chart::{ChartMode, ChartSeries, build_series};

// Controller
pub use crate::controller::{
    ChartSink, DashboardController, InputEvent, Phase, RenderPlan, ViewSink, ViewState,
};

// Boundary payloads
pub use crate::viewmodel::{PageView, StatsView};

// Logging
pub use crate::logger::{EventLog, EventType, LogEntry, Severity};
