//! MarketPulse Market Data Crate
//!
//! This crate wraps the third-party REST provider that supplies stock prices,
//! public holidays, earnings call transcripts and crypto prices.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   Core services  | --> |  MarketDataProvider  |  (trait, credential per call)
//! +------------------+     +----------------------+
//!                                    |
//!                                    v
//!                          +----------------------+
//!                          |  ApiNinjasProvider   |  (reqwest, X-Api-Key header)
//!                          +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`StockPrice`] - Latest price and previous close for a ticker
//! - [`Holiday`] - Public holiday entry
//! - [`EarningsTranscript`] - Pass-through transcript record
//! - [`CryptoPrice`] - Latest crypto price
//! - [`MarketDataError`] - Provider error taxonomy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CryptoPrice, EarningsTranscript, Holiday, StockPrice};
pub use provider::api_ninjas::ApiNinjasProvider;
pub use provider::MarketDataProvider;
