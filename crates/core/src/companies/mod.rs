//! Tracked company roster.

mod model;

pub use model::{default_roster, find_company, Company};
