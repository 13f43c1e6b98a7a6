//! MarketPulse Core - Domain types and request-level services.
//!
//! This crate turns raw provider data into the snapshots served by the HTTP
//! layer. It owns the tracked roster, the market holiday rules, the reporting
//! period table and the concurrent fan-out over the provider. It knows nothing
//! about HTTP; the server crate maps its results and errors onto responses.

pub mod clock;
pub mod companies;
pub mod constants;
pub mod crypto;
pub mod earnings;
pub mod errors;
pub mod holidays;
pub mod market;
pub mod quotes;

pub use clock::{Clock, FixedClock, SystemClock};
pub use companies::Company;
pub use market::{MarketService, MarketServiceTrait, MarketSettings};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
