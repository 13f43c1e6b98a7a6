use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROSTER;

/// A tracked ticker and the company name shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub ticker: String,
    pub name: String,
}

impl Company {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
        }
    }
}

/// The five tracked technology companies, in display order.
pub fn default_roster() -> Vec<Company> {
    DEFAULT_ROSTER
        .iter()
        .map(|(ticker, name)| Company::new(*ticker, *name))
        .collect()
}

/// Exact (already uppercased) ticker lookup.
pub fn find_company<'a>(roster: &'a [Company], ticker: &str) -> Option<&'a Company> {
    roster.iter().find(|c| c.ticker == ticker)
}
