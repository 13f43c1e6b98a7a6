use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marketpulse_market_data::CryptoPrice;

/// Outcome of fetching one crypto symbol; `price` is `None` iff it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoQuoteResult {
    pub symbol: String,
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CryptoQuoteResult {
    pub fn from_price(symbol: &str, price: &CryptoPrice) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: Some(price.price),
            error: None,
        }
    }

    pub fn failed(symbol: &str, error: impl Into<String>) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoSummary {
    pub symbols_tracked: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
}

impl CryptoSummary {
    pub fn from_results(results: &[CryptoQuoteResult]) -> Self {
        let successful = results.iter().filter(|r| r.price.is_some()).count();
        Self {
            symbols_tracked: results.len(),
            successful_fetches: successful,
            failed_fetches: results.len() - successful,
        }
    }
}
