#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use chrono::NaiveDate;
use marketpulse_core::{FixedClock, MarketService, MarketSettings};
use marketpulse_market_data::{
    CryptoPrice, EarningsTranscript, Holiday, MarketDataError, MarketDataProvider, StockPrice,
};
use marketpulse_server::{api::app_router, AppState};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Upstream double that counts every call.
#[derive(Default)]
pub struct CountingProvider {
    pub failing_tickers: HashSet<String>,
    pub holidays: Vec<Holiday>,
    pub holidays_down: bool,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataProvider for CountingProvider {
    fn id(&self) -> &'static str {
        "COUNTING"
    }

    async fn get_stock_price(
        &self,
        _api_key: &str,
        ticker: &str,
    ) -> Result<StockPrice, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_tickers.contains(ticker) {
            return Err(MarketDataError::ProviderError {
                provider: "COUNTING".to_string(),
                message: "HTTP 503 Service Unavailable".to_string(),
            });
        }
        Ok(StockPrice::new(ticker, dec!(200)).with_previous_close(dec!(160)))
    }

    async fn get_holidays(
        &self,
        _api_key: &str,
        _country: &str,
        _year: i32,
    ) -> Result<Vec<Holiday>, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.holidays_down {
            return Err(MarketDataError::Timeout {
                provider: "COUNTING".to_string(),
            });
        }
        Ok(self.holidays.clone())
    }

    async fn get_earnings_transcript(
        &self,
        _api_key: &str,
        ticker: &str,
        year: i32,
        quarter: u8,
    ) -> Result<EarningsTranscript, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if ticker == "MSFT" && year == 2024 && quarter == 2 {
            let value = json!({"date": "2024-07-30", "transcript": "Good afternoon."});
            return Ok(serde_json::from_value(value).unwrap());
        }
        Err(MarketDataError::NotFound(ticker.to_string()))
    }

    async fn get_crypto_price(
        &self,
        _api_key: &str,
        symbol: &str,
    ) -> Result<CryptoPrice, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CryptoPrice::new(symbol, dec!(64000.5)))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn router_with(
    provider: Arc<CountingProvider>,
    api_key: Option<&str>,
    today: NaiveDate,
) -> Router {
    let settings = MarketSettings::default().with_api_key(api_key.map(str::to_string));
    let service =
        MarketService::new(provider, settings).with_clock(Arc::new(FixedClock::at_date(today)));
    app_router(Arc::new(AppState {
        market_service: Arc::new(service),
    }))
}

pub fn router(provider: Arc<CountingProvider>, today: NaiveDate) -> Router {
    router_with(provider, Some("test-key"), today)
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
