//! Reporting period selection.

use chrono::{Datelike, NaiveDate};

use crate::earnings::model::{ReportingPeriod, TranscriptRequest};
use crate::errors::{Error, Result};

/// The quarter whose earnings call has most likely happened by `today`.
///
/// Companies report one to two months after a quarter closes, so the lookup
/// lags by one quarter: Jan-Mar → Q4 of last year, Apr-Jun → Q1,
/// Jul-Sep → Q2, Oct-Dec → Q3.
pub fn most_recent_quarter(today: NaiveDate) -> ReportingPeriod {
    let year = today.year();
    match today.month() {
        1..=3 => ReportingPeriod::new(year - 1, 4),
        4..=6 => ReportingPeriod::new(year, 1),
        7..=9 => ReportingPeriod::new(year, 2),
        _ => ReportingPeriod::new(year, 3),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl TranscriptRequest {
    /// Turn raw query parameters into a request.
    ///
    /// Returns `Ok(None)` when no ticker was given. The explicit period is used
    /// only when both `year` and `quarter` are present; otherwise both fall
    /// back to [`most_recent_quarter`].
    pub fn resolve(
        ticker: Option<&str>,
        year: Option<&str>,
        quarter: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<Self>> {
        let Some(ticker) = non_blank(ticker) else {
            return Ok(None);
        };
        let ticker = ticker.to_uppercase();

        let period = match (non_blank(year), non_blank(quarter)) {
            (Some(year), Some(quarter)) => {
                // Whole-string parse: trailing junk like "2024abc" is rejected, not truncated.
                let year: i32 = year
                    .parse()
                    .map_err(|_| Error::Validation(format!("Invalid year: {}", year)))?;
                let quarter: u8 = quarter
                    .parse()
                    .ok()
                    .filter(|q| (1..=4).contains(q))
                    .ok_or_else(|| {
                        Error::Validation(format!("Invalid quarter: {} (expected 1-4)", quarter))
                    })?;
                ReportingPeriod::new(year, quarter)
            }
            _ => most_recent_quarter(today),
        };

        Ok(Some(Self { ticker, period }))
    }
}
