//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The API Ninjas provider used in production

mod traits;

pub mod api_ninjas;

// Re-exports
pub use traits::MarketDataProvider;
