use std::net::SocketAddr;

use anyhow::Context;
use marketpulse_core::constants::{API_KEY_ENV, DEFAULT_HOLIDAY_COUNTRY};
use marketpulse_market_data::provider::api_ninjas::DEFAULT_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Upstream credential. Left unset, every data endpoint answers 500.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub holiday_country: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid MP_LISTEN_ADDR")?;
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
        let upstream_url =
            std::env::var("MP_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let holiday_country = std::env::var("MP_HOLIDAY_COUNTRY")
            .unwrap_or_else(|_| DEFAULT_HOLIDAY_COUNTRY.to_string());
        Ok(Self {
            listen_addr,
            api_key,
            upstream_url,
            holiday_country,
        })
    }
}
