use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest traded price for a single ticker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    /// Ticker as echoed by the provider
    pub ticker: String,

    /// Current/last price (required)
    pub price: Decimal,

    /// Previous session close
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,
}

impl StockPrice {
    /// Create a price with only the required fields set.
    pub fn new(ticker: impl Into<String>, price: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            price,
            previous_close: None,
        }
    }

    /// Builder-style setter for the previous close.
    pub fn with_previous_close(mut self, previous_close: Decimal) -> Self {
        self.previous_close = Some(previous_close);
        self
    }
}
