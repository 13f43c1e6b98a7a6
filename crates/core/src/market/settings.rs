use crate::companies::{default_roster, Company};
use crate::constants::{
    API_KEY_ENV, DEFAULT_CRYPTO_SYMBOLS, DEFAULT_HOLIDAY_COUNTRY, MARKET_HOLIDAY_NAMES,
};
use crate::errors::{Error, Result};

/// Immutable inputs shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSettings {
    /// Upstream credential; `None` (or blank) is a configuration error at request time
    pub api_key: Option<String>,
    pub roster: Vec<Company>,
    pub holiday_names: Vec<String>,
    pub holiday_country: String,
    pub crypto_symbols: Vec<String>,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            roster: default_roster(),
            holiday_names: MARKET_HOLIDAY_NAMES.iter().map(|s| s.to_string()).collect(),
            holiday_country: DEFAULT_HOLIDAY_COUNTRY.to_string(),
            crypto_symbols: DEFAULT_CRYPTO_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MarketSettings {
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_holiday_country(mut self, country: impl Into<String>) -> Self {
        self.holiday_country = country.into();
        self
    }

    /// The configured credential, or a configuration error.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "{} environment variable is not configured",
                    API_KEY_ENV
                ))
            })
    }
}
