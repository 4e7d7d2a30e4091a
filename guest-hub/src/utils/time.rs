//! Hotel-local time
//!
//! Operating hours are local to the hotel, not to the server. The zone
//! comes from the hotel's settings and falls back to `HOTEL_TIMEZONE`.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "Europe/Sofia";

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant (local runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Today at `hour:minute` UTC
    pub fn at_utc(hour: u32, minute: u32) -> Self {
        let now = Utc::now();
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        Self(now.date_naive().and_time(time).and_utc())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type SharedClock = Arc<dyn Clock>;

/// Parse an IANA zone name
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Resolve the hotel zone: its own setting, then the deployment default, then UTC
pub fn hotel_timezone(name: &str, fallback: &str) -> Tz {
    if let Some(tz) = parse_timezone(name) {
        return tz;
    }
    tracing::warn!(timezone = %name, fallback = %fallback, "Unknown hotel time zone");
    parse_timezone(fallback).unwrap_or(Tz::UTC)
}

/// Local wall-clock time of `instant` in `tz`
pub fn local_time(instant: DateTime<Utc>, tz: Tz) -> NaiveTime {
    instant.with_timezone(&tz).time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_time_conversion() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 15, 0, 0).unwrap();
        let sofia = parse_timezone("Europe/Sofia").unwrap();
        // EEST, UTC+3
        assert_eq!(local_time(instant, sofia), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(local_time(instant, Tz::UTC), NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    }

    #[test]
    fn test_hotel_timezone_fallback() {
        assert_eq!(hotel_timezone("Europe/Berlin", "UTC"), Tz::Europe__Berlin);
        assert_eq!(hotel_timezone("Mars/Olympus", "Europe/Sofia"), Tz::Europe__Sofia);
        assert_eq!(hotel_timezone("", "nonsense"), Tz::UTC);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at_utc(18, 0);
        assert_eq!(local_time(clock.now_utc(), Tz::UTC), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }
}
