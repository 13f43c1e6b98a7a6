//! Core error types for MarketPulse.
//!
//! Upstream failures are mostly absorbed inside the aggregation services and
//! never reach this type. What remains are the request-level outcomes a caller
//! has to distinguish: broken configuration, invalid input and a genuinely
//! missing resource.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core services.
#[derive(Error, Debug)]
pub enum Error {
    /// A required setting (the upstream credential) is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    /// The provider has no transcript for the requested period.
    #[error("No earnings transcript found for {ticker} Q{quarter} {year}")]
    TranscriptNotFound {
        ticker: String,
        year: i32,
        quarter: u8,
    },
}
