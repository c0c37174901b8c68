use super::config::ClockConfig;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};
use parking_lot::Mutex;

/// Source of the current calendar day. The streak rules never look at time of day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock of the running process.
///
/// Without an offset the process-local time zone decides where a day starts,
/// so users far from the server's zone can see day boundaries shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc_offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { utc_offset: None }
    }

    /// Returns `None` when the offset is outside +/- 24 hours.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(minutes.checked_mul(60)?)?;
        Some(Self { utc_offset: Some(offset) })
    }

    pub fn from_config(config: Option<&ClockConfig>) -> Self {
        match config.and_then(|c| c.utc_offset_minutes) {
            Some(minutes) => Self::with_offset_minutes(minutes).unwrap_or_else(|| {
                tracing::warn!(minutes, "ignoring out-of-range UTC offset, using local time");
                Self::local()
            }),
            None => Self::local(),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.utc_offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// A clock pinned to a day that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    day: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self { day: Mutex::new(day) }
    }

    pub fn set(&self, day: NaiveDate) {
        *self.day.lock() = day;
    }

    pub fn advance_days(&self, days: i64) {
        let mut day = self.day.lock();
        *day += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.day.lock()
    }
}

/// Parses a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the date as written, without converting zones.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|ts| ts.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(parse_day("2024-05-17"), Some(expected));
        assert_eq!(parse_day("2024-05-17T23:30:00+02:00"), Some(expected));
        assert_eq!(parse_day("17/05/2024"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        clock.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        assert!(SystemClock::with_offset_minutes(180).is_some());
        assert!(SystemClock::with_offset_minutes(24 * 60).is_none());
    }
}
