//! Market data models
//!
//! This module contains the provider-agnostic data types returned by
//! [`MarketDataProvider`](crate::provider::MarketDataProvider):
//! - `quote` - Latest stock price (StockPrice)
//! - `holiday` - Public holiday entries (Holiday)
//! - `transcript` - Earnings call transcripts (EarningsTranscript)
//! - `crypto` - Latest crypto price (CryptoPrice)

mod crypto;
mod holiday;
mod quote;
mod transcript;

pub use crypto::CryptoPrice;
pub use holiday::Holiday;
pub use quote::StockPrice;
pub use transcript::EarningsTranscript;
