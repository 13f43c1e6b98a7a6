//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! upstream providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CryptoPrice, EarningsTranscript, Holiday, StockPrice};

/// Trait for upstream market data providers.
///
/// Providers are stateless with respect to credentials: the API key is passed
/// on every call so the caller decides when a credential is missing before any
/// request is issued.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketpulse_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     client: reqwest::Client,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "API_NINJAS". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest price for a stock ticker.
    async fn get_stock_price(
        &self,
        api_key: &str,
        ticker: &str,
    ) -> Result<StockPrice, MarketDataError>;

    /// Fetch the public holidays for a country and calendar year.
    ///
    /// Entries are returned in provider order.
    async fn get_holidays(
        &self,
        api_key: &str,
        country: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, MarketDataError>;

    /// Fetch a single earnings call transcript.
    ///
    /// Returns [`MarketDataError::NotFound`] when the provider has no
    /// transcript for the requested period.
    async fn get_earnings_transcript(
        &self,
        api_key: &str,
        ticker: &str,
        year: i32,
        quarter: u8,
    ) -> Result<EarningsTranscript, MarketDataError>;

    /// Fetch the latest USD price for a crypto symbol (e.g. "BTC").
    async fn get_crypto_price(
        &self,
        api_key: &str,
        symbol: &str,
    ) -> Result<CryptoPrice, MarketDataError>;
}
