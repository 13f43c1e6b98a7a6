//! Earnings call transcript lookup.
//!
//! - [`model`] - Reporting period, resolved request and response records
//! - [`period`] - Quarter-lag table and query parameter resolution

pub mod model;
pub mod period;

pub use model::{ReportingPeriod, TranscriptOverview, TranscriptRecord, TranscriptRequest};
pub use period::most_recent_quarter;
