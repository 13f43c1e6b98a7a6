//! Response bodies for the HTTP surface.
//!
//! Core snapshots are mapped into these camelCase envelopes so the wire shape
//! stays in one place.

use chrono::{DateTime, SecondsFormat, Utc};
use marketpulse_core::crypto::CryptoQuoteResult;
use marketpulse_core::earnings::{ReportingPeriod, TranscriptOverview, TranscriptRecord};
use marketpulse_core::holidays::HolidayAnalysis;
use marketpulse_core::market::{
    CryptoSnapshot, HolidayStockSnapshot, StockSnapshot, TranscriptLookup, TranscriptResult,
};
use marketpulse_core::quotes::QuoteResult;
use marketpulse_core::Company;
use marketpulse_market_data::Holiday;
use serde::Serialize;

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksMetadata {
    pub companies_tracked: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
}

#[derive(Debug, Serialize)]
pub struct StocksResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: Vec<QuoteResult>,
    pub metadata: StocksMetadata,
}

impl From<StockSnapshot> for StocksResponse {
    fn from(snapshot: StockSnapshot) -> Self {
        Self {
            success: true,
            timestamp: iso_timestamp(snapshot.timestamp),
            metadata: StocksMetadata {
                companies_tracked: snapshot.summary.companies_tracked,
                successful_fetches: snapshot.summary.successful_fetches,
                failed_fetches: snapshot.summary.failed_fetches,
            },
            data: snapshot.data,
        }
    }
}

/// Holiday analysis plus the full filtered list for the year.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayBlock {
    #[serde(flatten)]
    pub analysis: HolidayAnalysis,
    pub all_market_holidays: Vec<Holiday>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayStocksMetadata {
    pub companies_tracked: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
    pub market_holidays_found: usize,
    pub holiday_data_available: bool,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct HolidayStocksResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: Vec<QuoteResult>,
    pub holidays: HolidayBlock,
    pub metadata: HolidayStocksMetadata,
}

impl From<HolidayStockSnapshot> for HolidayStocksResponse {
    fn from(snapshot: HolidayStockSnapshot) -> Self {
        Self {
            success: true,
            timestamp: iso_timestamp(snapshot.timestamp),
            metadata: HolidayStocksMetadata {
                companies_tracked: snapshot.summary.companies_tracked,
                successful_fetches: snapshot.summary.successful_fetches,
                failed_fetches: snapshot.summary.failed_fetches,
                market_holidays_found: snapshot.market_holidays_found,
                holiday_data_available: snapshot.holiday_data_available,
                year: snapshot.year,
            },
            holidays: HolidayBlock {
                analysis: snapshot.holidays,
                all_market_holidays: snapshot.all_market_holidays,
            },
            data: snapshot.data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoMetadata {
    pub symbols_tracked: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
}

#[derive(Debug, Serialize)]
pub struct CryptoResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: Vec<CryptoQuoteResult>,
    pub metadata: CryptoMetadata,
}

impl From<CryptoSnapshot> for CryptoResponse {
    fn from(snapshot: CryptoSnapshot) -> Self {
        Self {
            success: true,
            timestamp: iso_timestamp(snapshot.timestamp),
            metadata: CryptoMetadata {
                symbols_tracked: snapshot.summary.symbols_tracked,
                successful_fetches: snapshot.summary.successful_fetches,
                failed_fetches: snapshot.summary.failed_fetches,
            },
            data: snapshot.data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestedPeriod {
    pub year: i32,
    pub quarter: u8,
    pub description: String,
}

impl From<ReportingPeriod> for SuggestedPeriod {
    fn from(period: ReportingPeriod) -> Self {
        Self {
            year: period.year,
            quarter: period.quarter,
            description: period.description(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsageParameters {
    pub ticker: &'static str,
    pub year: &'static str,
    pub quarter: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub message: &'static str,
    pub example: &'static str,
    pub parameters: UsageParameters,
}

impl Default for Usage {
    fn default() -> Self {
        Self {
            message: "To fetch a specific transcript, use query parameters:",
            example: "/api/earnings?ticker=MSFT&year=2024&quarter=2",
            parameters: UsageParameters {
                ticker: "Stock ticker symbol (required)",
                year: "Fiscal year (optional, defaults to most recent)",
                quarter: "Quarter 1-4 (optional, defaults to most recent)",
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsOverviewResponse {
    pub success: bool,
    pub timestamp: String,
    pub available_companies: Vec<Company>,
    pub suggested_period: SuggestedPeriod,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: TranscriptRecord,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EarningsResponse {
    Overview(EarningsOverviewResponse),
    Transcript(TranscriptResponse),
}

impl EarningsResponse {
    fn overview(timestamp: String, overview: TranscriptOverview) -> Self {
        EarningsResponse::Overview(EarningsOverviewResponse {
            success: true,
            timestamp,
            available_companies: overview.available_companies,
            suggested_period: overview.suggested_period.into(),
            usage: Usage::default(),
        })
    }
}

impl From<TranscriptLookup> for EarningsResponse {
    fn from(lookup: TranscriptLookup) -> Self {
        let timestamp = iso_timestamp(lookup.timestamp);
        match lookup.result {
            TranscriptResult::Overview(overview) => EarningsResponse::overview(timestamp, overview),
            TranscriptResult::Found(record) => EarningsResponse::Transcript(TranscriptResponse {
                success: true,
                timestamp,
                data: record,
            }),
        }
    }
}
