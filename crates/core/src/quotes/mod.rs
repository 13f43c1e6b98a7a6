//! Stock quote aggregation for the tracked roster.
//!
//! - [`model`] - Per-company result and fetch summary
//! - [`service`] - Concurrent fan-out over the roster

pub mod model;
pub mod service;

pub use model::{FetchSummary, QuoteResult};
pub use service::fetch_roster_quotes;
