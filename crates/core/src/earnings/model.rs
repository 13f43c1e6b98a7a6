use serde::{Deserialize, Serialize};

use crate::companies::Company;
use marketpulse_market_data::EarningsTranscript;

/// A fiscal quarter, e.g. Q2 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub year: i32,
    pub quarter: u8,
}

impl ReportingPeriod {
    pub fn new(year: i32, quarter: u8) -> Self {
        Self { year, quarter }
    }

    /// Display form, e.g. "Q2 2024".
    pub fn description(&self) -> String {
        format!("Q{} {}", self.quarter, self.year)
    }
}

/// A transcript lookup with the period already decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRequest {
    /// Uppercased ticker
    pub ticker: String,
    pub period: ReportingPeriod,
}

/// A fetched transcript with the display name of its company.
///
/// Serializes as the provider's fields plus `companyName`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptRecord {
    #[serde(flatten)]
    pub transcript: EarningsTranscript,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

/// Returned when no ticker is requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptOverview {
    pub available_companies: Vec<Company>,
    pub suggested_period: ReportingPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_period_description() {
        assert_eq!(ReportingPeriod::new(2023, 4).description(), "Q4 2023");
    }

    #[test]
    fn test_record_flattens_transcript() {
        let transcript: EarningsTranscript =
            serde_json::from_value(json!({"date": "2024-07-30", "transcript": "Hello"})).unwrap();
        let record = TranscriptRecord {
            transcript,
            company_name: "Microsoft Corporation".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2024-07-30");
        assert_eq!(value["transcript"], "Hello");
        assert_eq!(value["companyName"], "Microsoft Corporation");
    }
}
