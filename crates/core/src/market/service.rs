use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use log::{debug, error};

use crate::clock::{Clock, RequestTime, SystemClock};
use crate::companies::find_company;
use crate::crypto::{fetch_crypto_quotes, CryptoSummary};
use crate::earnings::{
    most_recent_quarter, TranscriptOverview, TranscriptRecord, TranscriptRequest,
};
use crate::errors::{Error, Result};
use crate::holidays::{analyze_holidays, filter_market_holidays};
use crate::market::model::{
    CryptoSnapshot, HolidayStockSnapshot, StockSnapshot, TranscriptLookup, TranscriptQuery,
    TranscriptResult,
};
use crate::market::settings::MarketSettings;
use crate::market::traits::MarketServiceTrait;
use crate::quotes::{fetch_roster_quotes, FetchSummary};
use marketpulse_market_data::{Holiday, MarketDataProvider};

/// Aggregates upstream data for the dashboard endpoints.
///
/// Holds no per-request state; every operation is independent.
pub struct MarketService {
    provider: Arc<dyn MarketDataProvider>,
    settings: MarketSettings,
    clock: Arc<dyn Clock>,
}

impl MarketService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, settings: MarketSettings) -> Self {
        Self {
            provider,
            settings,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Holiday list for `year`, or `None` if the fetch failed.
    async fn fetch_holidays(&self, api_key: &str, year: i32) -> Option<Vec<Holiday>> {
        match self
            .provider
            .get_holidays(api_key, &self.settings.holiday_country, year)
            .await
        {
            Ok(holidays) => {
                debug!("Fetched {} holidays for {}", holidays.len(), year);
                Some(holidays)
            }
            Err(e) => {
                error!(
                    "Error fetching {} holidays for {}: {}",
                    self.settings.holiday_country, year, e
                );
                None
            }
        }
    }

    fn overview_at(&self, today: NaiveDate) -> TranscriptOverview {
        TranscriptOverview {
            available_companies: self.settings.roster.clone(),
            suggested_period: most_recent_quarter(today),
        }
    }

    async fn fetch_record(
        &self,
        api_key: &str,
        request: TranscriptRequest,
    ) -> Result<TranscriptRecord> {
        let TranscriptRequest { ticker, period } = request;
        let transcript = self
            .provider
            .get_earnings_transcript(api_key, &ticker, period.year, period.quarter)
            .await
            .map_err(|e| {
                error!("Error fetching {} {}: {}", ticker, period.description(), e);
                Error::TranscriptNotFound {
                    ticker: ticker.clone(),
                    year: period.year,
                    quarter: period.quarter,
                }
            })?;

        let company_name = find_company(&self.settings.roster, &ticker)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| ticker.clone());

        Ok(TranscriptRecord {
            transcript,
            company_name,
        })
    }
}

#[async_trait]
impl MarketServiceTrait for MarketService {
    async fn stock_snapshot(&self) -> Result<StockSnapshot> {
        let api_key = self.settings.api_key()?;
        let time = RequestTime::capture(self.clock.as_ref());

        let data = fetch_roster_quotes(self.provider.as_ref(), api_key, &self.settings.roster).await;
        let summary = FetchSummary::from_results(&data);

        Ok(StockSnapshot {
            timestamp: time.utc(),
            data,
            summary,
        })
    }

    async fn holiday_stock_snapshot(&self) -> Result<HolidayStockSnapshot> {
        let api_key = self.settings.api_key()?;
        let time = RequestTime::capture(self.clock.as_ref());
        let today = time.today();
        let year = today.year();

        let (data, holidays) = futures::join!(
            fetch_roster_quotes(self.provider.as_ref(), api_key, &self.settings.roster),
            self.fetch_holidays(api_key, year),
        );

        let holiday_data_available = holidays.is_some();
        let all_market_holidays =
            filter_market_holidays(holidays.unwrap_or_default(), &self.settings.holiday_names);
        let analysis = analyze_holidays(today, &all_market_holidays);
        let summary = FetchSummary::from_results(&data);

        Ok(HolidayStockSnapshot {
            timestamp: time.utc(),
            data,
            holidays: analysis,
            market_holidays_found: all_market_holidays.len(),
            all_market_holidays,
            summary,
            holiday_data_available,
            year,
        })
    }

    async fn crypto_snapshot(&self) -> Result<CryptoSnapshot> {
        let api_key = self.settings.api_key()?;
        let time = RequestTime::capture(self.clock.as_ref());

        let data =
            fetch_crypto_quotes(self.provider.as_ref(), api_key, &self.settings.crypto_symbols)
                .await;
        let summary = CryptoSummary::from_results(&data);

        Ok(CryptoSnapshot {
            timestamp: time.utc(),
            data,
            summary,
        })
    }

    async fn lookup_transcript(&self, query: TranscriptQuery) -> Result<TranscriptLookup> {
        let api_key = self.settings.api_key()?;
        let time = RequestTime::capture(self.clock.as_ref());
        let today = time.today();

        let request = TranscriptRequest::resolve(
            query.ticker.as_deref(),
            query.year.as_deref(),
            query.quarter.as_deref(),
            today,
        )?;

        let result = match request {
            Some(request) => TranscriptResult::Found(self.fetch_record(api_key, request).await?),
            None => TranscriptResult::Overview(self.overview_at(today)),
        };

        Ok(TranscriptLookup {
            timestamp: time.utc(),
            result,
        })
    }
}
