//! Holiday analysis domain models.

use serde::{Deserialize, Serialize};

use marketpulse_market_data::Holiday;

// =============================================================================
// Market Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Open => "OPEN",
            MarketStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Impact
// =============================================================================

/// Severity attached to an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSeverity {
    High,
    Medium,
    Low,
    Info,
}

impl ImpactSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactSeverity::High => "high",
            ImpactSeverity::Medium => "medium",
            ImpactSeverity::Low => "low",
            ImpactSeverity::Info => "info",
        }
    }
}

impl std::fmt::Display for ImpactSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an advisory message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactKind {
    MarketClosed,
    UpcomingClosure,
    HolidaySeason,
    General,
}

/// One advisory entry shown next to the stock table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayImpact {
    #[serde(rename = "type")]
    pub kind: ImpactKind,
    pub severity: ImpactSeverity,
    pub message: String,
}

impl HolidayImpact {
    pub fn new(kind: ImpactKind, severity: ImpactSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

// =============================================================================
// Analysis
// =============================================================================

/// Holiday facts derived for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayAnalysis {
    pub is_today_holiday: bool,
    pub today_holiday: Option<Holiday>,
    /// Ascending by date, at most three entries
    pub upcoming_holidays: Vec<Holiday>,
    pub is_holiday_season: bool,
    pub market_status: MarketStatus,
    pub holiday_impact: Vec<HolidayImpact>,
}
