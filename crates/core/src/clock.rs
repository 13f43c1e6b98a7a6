//! Source of "now" for the services.
//!
//! Every service operation reads the clock once and derives both the response
//! timestamp and the local calendar date from that single reading.

use chrono::{DateTime, Local, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the server's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a fixed instant. Used in tests and for replaying a day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Noon local time on the given date.
    ///
    /// Falls back to the current time if noon does not exist locally, which
    /// no real timezone does.
    pub fn at_date(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| noon.and_local_timezone(Local).earliest())
            .unwrap_or_else(Local::now);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// A single reading of the clock, shared by every derived value in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTime {
    pub instant: DateTime<Local>,
}

impl RequestTime {
    pub fn capture(clock: &dyn Clock) -> Self {
        Self {
            instant: clock.now(),
        }
    }

    /// Local calendar date with the time of day dropped.
    pub fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// UTC instant used for response timestamps.
    pub fn utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}
