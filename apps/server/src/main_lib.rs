use std::sync::Arc;

use crate::config::Config;
use marketpulse_core::{MarketService, MarketServiceTrait, MarketSettings};
use marketpulse_market_data::ApiNinjasProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub market_service: Arc<dyn MarketServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider = Arc::new(ApiNinjasProvider::with_base_url(&config.upstream_url));
    tracing::info!("Upstream provider: {}", provider.base_url());

    let settings = MarketSettings::default()
        .with_api_key(config.api_key.clone())
        .with_holiday_country(&config.holiday_country);
    let market_service = Arc::new(MarketService::new(provider, settings));

    Arc::new(AppState { market_service })
}
