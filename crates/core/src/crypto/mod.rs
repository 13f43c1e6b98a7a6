//! Crypto price ticker (BTC, ETH by default).

pub mod model;
pub mod service;

pub use model::{CryptoQuoteResult, CryptoSummary};
pub use service::fetch_crypto_quotes;
