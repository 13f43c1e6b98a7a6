use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price for a crypto symbol, quoted in USD.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptoPrice {
    pub symbol: String,
    pub price: Decimal,
}

impl CryptoPrice {
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}
