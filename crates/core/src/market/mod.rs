//! Request-level market services.
//!
//! [`MarketService`] is what the HTTP layer talks to. Each operation checks the
//! upstream credential, reads the clock once, fans out to the provider and
//! folds every branch's failure into a value before assembling its snapshot.
//!
//! ```text
//! MarketService → quotes / holidays / crypto / earnings → MarketDataProvider
//! ```

pub mod model;
pub mod service;
pub mod settings;
pub mod traits;


pub use model::{
    CryptoSnapshot, HolidayStockSnapshot, StockSnapshot, TranscriptLookup, TranscriptQuery,
    TranscriptResult,
};
pub use service::MarketService;
pub use settings::MarketSettings;
pub use traits::MarketServiceTrait;
