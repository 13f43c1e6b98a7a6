//! Roster-wide quote fan-out.

use futures::future::join_all;
use log::warn;

use crate::companies::Company;
use crate::quotes::model::QuoteResult;
use marketpulse_market_data::MarketDataProvider;

/// Fetch every roster company's price concurrently.
///
/// Each branch resolves to its own `Result`; failures are turned into
/// [`QuoteResult::failed`] after the join, so one bad ticker never affects its
/// siblings. The output has one entry per company in roster order.
pub async fn fetch_roster_quotes(
    provider: &dyn MarketDataProvider,
    api_key: &str,
    roster: &[Company],
) -> Vec<QuoteResult> {
    let outcomes = join_all(
        roster
            .iter()
            .map(|company| provider.get_stock_price(api_key, &company.ticker)),
    )
    .await;

    roster
        .iter()
        .zip(outcomes)
        .map(|(company, outcome)| match outcome {
            Ok(price) => QuoteResult::from_price(company, &price),
            Err(e) => {
                warn!("Error fetching {}: {}", company.ticker, e);
                QuoteResult::failed(company, format!("Failed to fetch {}: {}", company.ticker, e))
            }
        })
        .collect()
}
