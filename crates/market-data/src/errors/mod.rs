//! Error types for the market data crate.
//!
//! [`MarketDataError`] is returned by every provider call. Callers in the core
//! crate decide per call site whether an error is fatal, downgraded to a
//! missing value, or surfaced as "not found".

use thiserror::Error;

/// Errors that can occur while talking to an upstream provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no data for the requested resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider rejected the credential (HTTP 401/403).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out at the transport level.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A non-success HTTP status or transport failure.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered, but the body could not be understood.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::ProviderError {
            provider: "API_NINJAS".to_string(),
            message: "HTTP 500 Internal Server Error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Provider error: API_NINJAS - HTTP 500 Internal Server Error"
        );

        let error = MarketDataError::RateLimited {
            provider: "API_NINJAS".to_string(),
        };
        assert_eq!(error.to_string(), "Rate limited: API_NINJAS");
    }
}
