// src/calendar.rs
//! Canonical calendar date.
//!
//! Every freshness comparison goes through [`Calendar::today`], which renders
//! the current instant in one fixed named time zone. Server-local time and UTC
//! are never used for the date string.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Calendar date in the canonical time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalDate {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub day: u32,
}

impl CanonicalDate {
    /// Month index 0-11, used for the seasonal and trend tables
    pub fn month0(&self) -> u32 {
        self.month - 1
    }
}

/// Renders as `M/D/YYYY` without zero padding, e.g. `6/2/2024`
impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

/// Clock + time zone pair that answers "what day is it"
#[derive(Clone)]
pub struct Calendar {
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl Calendar {
    pub fn new(clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self { clock, tz }
    }

    pub fn system(tz: Tz) -> Self {
        Self::new(Arc::new(SystemClock), tz)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> CanonicalDate {
        date_in(self.clock.now(), self.tz)
    }
}

/// Canonical date of `instant` as seen in `tz`
pub fn date_in(instant: DateTime<Utc>, tz: Tz) -> CanonicalDate {
    let local = instant.with_timezone(&tz);
    CanonicalDate {
        year: local.year(),
        month: local.month(),
        day: local.day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Tokyo;

    #[test]
    fn test_display_has_no_padding() {
        let date = CanonicalDate { year: 2024, month: 6, day: 2 };
        assert_eq!(date.to_string(), "6/2/2024");

        let date = CanonicalDate { year: 2024, month: 12, day: 31 };
        assert_eq!(date.to_string(), "12/31/2024");
    }

    #[test]
    fn test_date_follows_timezone_not_utc() {
        // 03:00 UTC on June 2nd is still the evening of June 1st in New York
        let instant = Utc.with_ymd_and_hms(2024, 6, 2, 3, 0, 0).unwrap();
        assert_eq!(date_in(instant, New_York).to_string(), "6/1/2024");

        // ...and already mid-day June 2nd in Tokyo
        assert_eq!(date_in(instant, Tokyo).to_string(), "6/2/2024");
    }

    #[test]
    fn test_month0() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(date_in(instant, New_York).month0(), 0);

        let instant = Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap();
        assert_eq!(date_in(instant, New_York).month0(), 11);
    }

    #[test]
    fn test_calendar_with_fixed_clock() {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap(),
        ));
        let calendar = Calendar::new(clock.clone(), New_York);
        assert_eq!(calendar.today().to_string(), "6/1/2024");

        clock.set(Utc.with_ymd_and_hms(2024, 6, 2, 16, 0, 0).unwrap());
        assert_eq!(calendar.today().to_string(), "6/2/2024");
    }
}
