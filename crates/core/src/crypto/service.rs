use futures::future::join_all;
use log::warn;

use crate::crypto::model::CryptoQuoteResult;
use marketpulse_market_data::MarketDataProvider;

/// Fetch all symbols concurrently; output follows `symbols` order.
pub async fn fetch_crypto_quotes(
    provider: &dyn MarketDataProvider,
    api_key: &str,
    symbols: &[String],
) -> Vec<CryptoQuoteResult> {
    let outcomes = join_all(
        symbols
            .iter()
            .map(|symbol| provider.get_crypto_price(api_key, symbol)),
    )
    .await;

    symbols
        .iter()
        .zip(outcomes)
        .map(|(symbol, outcome)| match outcome {
            Ok(price) => CryptoQuoteResult::from_price(symbol, &price),
            Err(e) => {
                warn!("Error fetching crypto price for {}: {}", symbol, e);
                CryptoQuoteResult::failed(symbol, format!("Failed to fetch {}: {}", symbol, e))
            }
        })
        .collect()
}
