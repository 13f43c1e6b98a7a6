//! Quote result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::companies::Company;
use marketpulse_market_data::StockPrice;

/// Outcome of fetching one roster company's price.
///
/// `price` is `None` exactly when the fetch failed, in which case `error`
/// carries the reason. `change` and `change_percent` are only set when both
/// the price and a non-zero previous close are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub ticker: String,
    pub company_name: String,
    pub price: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteResult {
    pub fn from_price(company: &Company, price: &StockPrice) -> Self {
        let previous_close = price.previous_close.filter(|pc| !pc.is_zero());
        let (change, change_percent) = match previous_close {
            Some(pc) if !price.price.is_zero() => {
                let change = price.price - pc;
                let percent = change
                    .checked_div(pc)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
                (Some(change), percent)
            }
            _ => (None, None),
        };

        Self {
            ticker: company.ticker.clone(),
            company_name: company.name.clone(),
            price: Some(price.price),
            previous_close,
            change,
            change_percent,
            error: None,
        }
    }

    pub fn failed(company: &Company, error: impl Into<String>) -> Self {
        Self {
            ticker: company.ticker.clone(),
            company_name: company.name.clone(),
            price: None,
            previous_close: None,
            change: None,
            change_percent: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.price.is_some()
    }
}

/// Counts reported alongside an aggregated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchSummary {
    pub companies_tracked: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
}

impl FetchSummary {
    pub fn from_results(results: &[QuoteResult]) -> Self {
        let successful = results.iter().filter(|r| r.is_success()).count();
        Self {
            companies_tracked: results.len(),
            successful_fetches: successful,
            failed_fetches: results.len() - successful,
        }
    }
}
