//! Snapshots returned by [`MarketService`](super::MarketService).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{CryptoQuoteResult, CryptoSummary};
use crate::earnings::{TranscriptOverview, TranscriptRecord};
use crate::holidays::HolidayAnalysis;
use crate::quotes::{FetchSummary, QuoteResult};
use marketpulse_market_data::Holiday;

/// Roster quotes without holiday data.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSnapshot {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<QuoteResult>,
    pub summary: FetchSummary,
}

/// Roster quotes merged with the holiday analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayStockSnapshot {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<QuoteResult>,
    pub holidays: HolidayAnalysis,
    /// Every market holiday of the year, in provider order
    pub all_market_holidays: Vec<Holiday>,
    pub summary: FetchSummary,
    pub market_holidays_found: usize,
    /// False when the holiday fetch failed and an empty list was used
    pub holiday_data_available: bool,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CryptoSnapshot {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CryptoQuoteResult>,
    pub summary: CryptoSummary,
}

/// Raw transcript query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranscriptQuery {
    pub ticker: Option<String>,
    pub year: Option<String>,
    pub quarter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranscriptResult {
    /// No ticker requested: roster plus suggested period
    Overview(TranscriptOverview),
    Found(TranscriptRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLookup {
    pub timestamp: DateTime<Utc>,
    pub result: TranscriptResult,
}
