//! The aggregation core: one linear pass from tree to document.
//!
//! - `record`: discovered-file records and group labels
//! - `document`: the append-only output document and its block shapes
//! - `summary`: run counters
//! - `aggregator`: the pass itself

pub mod aggregator;
pub mod document;
pub mod record;
pub mod summary;

pub use aggregator::{Aggregator, aggregate};
pub use document::OutputDocument;
pub use record::{FileRecord, service_name};
pub use summary::MergeSummary;
