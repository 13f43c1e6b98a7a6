//! Market holiday detection.
//!
//! The provider returns every public holiday for a country. Only the ones on
//! which exchanges close are kept, and a per-request [`HolidayAnalysis`] is
//! derived from them against the request's "today".
//!
//! - [`model`] - Market status, impact messages and the analysis itself
//! - [`analysis`] - Allow-list filtering and window computations

pub mod analysis;
pub mod model;

pub use analysis::{analyze_holidays, filter_market_holidays, is_holiday_season, is_market_holiday};
pub use model::{HolidayAnalysis, HolidayImpact, ImpactKind, ImpactSeverity, MarketStatus};
