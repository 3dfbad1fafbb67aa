//! Source of "now" and "today"
//!
//! Streaks compare calendar dates, so every read and write must use the
//! same time zone. [`SystemClock`] always answers in local time.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Today's date in the local time zone
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }

    /// Noon local time on `date`
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("12:00:00 is a valid time");
        let at = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&noon));
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(FixedClock::on(date).today(), date);
    }
}
