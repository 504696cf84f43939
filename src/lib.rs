#![forbid(unsafe_code)]

//! lexidash — in-memory word-frequency dashboard core.
//!
//! Loads a precomputed (word, count) snapshot and derives everything a
//! dashboard needs from it:
//! 1. **Query pipeline** — case-insensitive filter, field+direction sort,
//!    fixed-size pagination
//! 2. **Summary stats** — totals and distinct-word metrics over the raw set
//! 3. **Chart series** — a declarative top-N description for an external
//!    charting collaborator
//!
//! A single [`controller::DashboardController`] applies typed input events
//! as deterministic state transitions and pushes payloads to view and chart
//! sinks; rendering itself stays outside this crate.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use lexidash::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use lexidash::query::{filter_records, paginate};
//! use lexidash::store::RecordStore;
//! ```

pub mod prelude;

pub mod chart;
pub mod controller;
pub mod core;
pub mod logger;
pub mod query;
pub mod store;
pub mod viewmodel;
