//! Pure transforms over the record sequence: filter, sort, paginate,
//! summarize.
//!
//! Every function here is total over well-formed input — empty datasets,
//! empty search terms, and out-of-range page requests are defined outcomes,
//! never errors.

pub mod filter;
pub mod page;
pub mod sort;
pub mod stats;

pub use filter::filter_records;
pub use page::{Page, paginate};
pub use sort::{SortDirection, SortField, SortKey, sort_records};
pub use stats::{NO_TOP_WORD, Summary, summarize};
