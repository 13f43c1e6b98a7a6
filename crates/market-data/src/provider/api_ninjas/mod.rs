//! API Ninjas provider implementation.
//!
//! This module provides market data from the API Ninjas REST API:
//! - Latest stock prices via /stockprice
//! - Public holidays via /holidays
//! - Earnings call transcripts via /earningstranscript
//! - Latest crypto prices via /cryptoprice
//!
//! Every request carries the API key in the `X-Api-Key` header.
//! API documentation: https://api-ninjas.com/api

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use num_traits::FromPrimitive;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{CryptoPrice, EarningsTranscript, Holiday, StockPrice};
use crate::provider::MarketDataProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1";
const PROVIDER_ID: &str = "API_NINJAS";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Transport timeout; no other timeout is applied on top of it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /stockprice
#[derive(Debug, Deserialize)]
struct StockPriceResponse {
    ticker: Option<String>,
    /// Number or numeric string
    price: Option<Value>,
    previous_close: Option<Value>,
}

/// Response from /cryptoprice
#[derive(Debug, Deserialize)]
struct CryptoPriceResponse {
    symbol: Option<String>,
    /// API Ninjas sends this one as a string
    price: Option<Value>,
}

/// Error body, e.g. `{"error": "Invalid API Key."}`
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

// ============================================================================
// ApiNinjasProvider
// ============================================================================

/// API Ninjas market data provider.
pub struct ApiNinjasProvider {
    client: Client,
    base_url: String,
}

impl Default for ApiNinjasProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiNinjasProvider {
    /// Create a provider pointed at the public API Ninjas endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider pointed at a custom base URL (proxies, test stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request and parse the body as JSON.
    async fn fetch(
        &self,
        api_key: &str,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("API Ninjas request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(format!("{} ({})", endpoint, status)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(error_msg) = error_resp.error {
                    return Err(MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("HTTP {} - {}", status, error_msg),
                    });
                }
            }

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        serde_json::from_str(&body).map_err(|e| invalid_response(format!(
            "Failed to parse response: {}",
            e
        )))
    }
}

fn invalid_response(message: impl Into<String>) -> MarketDataError {
    MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

/// API Ninjas answers unknown symbols with `[]` or `{}` and a 200 status.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// Accept both JSON numbers and numeric strings.
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.as_f64().and_then(Decimal::from_f64),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[async_trait]
impl MarketDataProvider for ApiNinjasProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_stock_price(
        &self,
        api_key: &str,
        ticker: &str,
    ) -> Result<StockPrice, MarketDataError> {
        let body = self
            .fetch(api_key, "/stockprice", &[("ticker", ticker.to_string())])
            .await?;

        if is_empty_payload(&body) {
            return Err(MarketDataError::NotFound(ticker.to_string()));
        }

        let resp: StockPriceResponse = serde_json::from_value(body)
            .map_err(|e| invalid_response(format!("Unexpected stock price payload: {}", e)))?;

        let price = resp
            .price
            .as_ref()
            .and_then(decimal_from_value)
            .ok_or_else(|| invalid_response(format!("No price in response for {}", ticker)))?;

        let quote = StockPrice::new(resp.ticker.unwrap_or_else(|| ticker.to_string()), price);
        Ok(match resp.previous_close.as_ref().and_then(decimal_from_value) {
            Some(previous_close) => quote.with_previous_close(previous_close),
            None => quote,
        })
    }

    async fn get_holidays(
        &self,
        api_key: &str,
        country: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, MarketDataError> {
        let body = self
            .fetch(
                api_key,
                "/holidays",
                &[("country", country.to_string()), ("year", year.to_string())],
            )
            .await?;

        if !body.is_array() {
            return Err(invalid_response("Holiday list is not an array"));
        }

        serde_json::from_value(body)
            .map_err(|e| invalid_response(format!("Unexpected holiday payload: {}", e)))
    }

    async fn get_earnings_transcript(
        &self,
        api_key: &str,
        ticker: &str,
        year: i32,
        quarter: u8,
    ) -> Result<EarningsTranscript, MarketDataError> {
        let body = self
            .fetch(
                api_key,
                "/earningstranscript",
                &[
                    ("ticker", ticker.to_string()),
                    ("year", year.to_string()),
                    ("quarter", quarter.to_string()),
                ],
            )
            .await?;

        if is_empty_payload(&body) {
            return Err(MarketDataError::NotFound(format!(
                "{} Q{} {}",
                ticker, quarter, year
            )));
        }

        match body {
            Value::Object(fields) => Ok(EarningsTranscript::new(fields)),
            // Some plans wrap the record in a single-element array
            Value::Array(mut items) if items.len() == 1 => match items.remove(0) {
                Value::Object(fields) => Ok(EarningsTranscript::new(fields)),
                _ => Err(invalid_response("Transcript entry is not an object")),
            },
            _ => Err(invalid_response("Unexpected transcript payload")),
        }
    }

    async fn get_crypto_price(
        &self,
        api_key: &str,
        symbol: &str,
    ) -> Result<CryptoPrice, MarketDataError> {
        let body = self
            .fetch(api_key, "/cryptoprice", &[("symbol", symbol.to_string())])
            .await?;

        if is_empty_payload(&body) {
            return Err(MarketDataError::NotFound(symbol.to_string()));
        }

        let resp: CryptoPriceResponse = serde_json::from_value(body)
            .map_err(|e| invalid_response(format!("Unexpected crypto price payload: {}", e)))?;

        let price = resp
            .price
            .as_ref()
            .and_then(decimal_from_value)
            .ok_or_else(|| invalid_response(format!("No price in response for {}", symbol)))?;

        Ok(CryptoPrice::new(
            resp.symbol.unwrap_or_else(|| symbol.to_string()),
            price,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_provider_id() {
        let provider = ApiNinjasProvider::new();
        assert_eq!(provider.id(), "API_NINJAS");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider = ApiNinjasProvider::with_base_url("http://127.0.0.1:9000/v1/");
        assert_eq!(provider.base_url(), "http://127.0.0.1:9000/v1");
        assert_eq!(ApiNinjasProvider::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_decimal_from_value() {
        assert_eq!(decimal_from_value(&json!(189.84)), Some(dec!(189.84)));
        assert_eq!(decimal_from_value(&json!("43000.12")), Some(dec!(43000.12)));
        assert_eq!(decimal_from_value(&json!(" 7 ")), Some(dec!(7)));
        assert_eq!(decimal_from_value(&json!("n/a")), None);
        assert_eq!(decimal_from_value(&json!(null)), None);
    }

    #[test]
    fn test_is_empty_payload() {
        assert!(is_empty_payload(&json!([])));
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&Value::Null));
        assert!(!is_empty_payload(&json!({"price": 1})));
        assert!(!is_empty_payload(&json!([{"name": "x"}])));
    }
}
