use async_trait::async_trait;

use crate::errors::Result;
use crate::market::model::{
    CryptoSnapshot, HolidayStockSnapshot, StockSnapshot, TranscriptLookup, TranscriptQuery,
};

/// Trait for market service operations
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    async fn stock_snapshot(&self) -> Result<StockSnapshot>;
    async fn holiday_stock_snapshot(&self) -> Result<HolidayStockSnapshot>;
    async fn crypto_snapshot(&self) -> Result<CryptoSnapshot>;
    /// Resolve raw query parameters and dispatch to the overview or a fetch.
    async fn lookup_transcript(&self, query: TranscriptQuery) -> Result<TranscriptLookup>;
}
