//! Operating-hours evaluation
//!
//! Windows are half-open `[open, close)` on the local clock. A window whose
//! open time is after its close time runs over midnight. Anything that does
//! not parse leaves the department open.

use chrono::{NaiveTime, Timelike};
use shared::hotel::OperatingWindow;

/// `H:MM` / `HH:MM` within 00:00–23:59 → minutes since midnight
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hours, minutes) = value.trim().split_once(':')?;
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

pub fn minutes_since_midnight(now: NaiveTime) -> u32 {
    now.hour() * 60 + now.minute()
}

pub fn is_open(window: &OperatingWindow, now: NaiveTime) -> bool {
    let (Some(open), Some(close)) = (parse_hhmm(&window.open), parse_hhmm(&window.close)) else {
        return true;
    };
    let now = minutes_since_midnight(now);

    if open == close {
        true
    } else if open < close {
        open <= now && now < close
    } else {
        now >= open || now < close
    }
}

/// Whether local time has reached `cutoff`; unparsable ⇒ never
pub fn is_after_cutoff(cutoff: &str, now: NaiveTime) -> bool {
    parse_hhmm(cutoff).is_some_and(|cutoff| minutes_since_midnight(now) >= cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("9:05"), Some(545));
        assert_eq!(parse_hhmm(" 23:59 "), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("9:5"), None);
        assert_eq!(parse_hhmm("123:00"), None);
        assert_eq!(parse_hhmm("+1:00"), None);
        assert_eq!(parse_hhmm("noon"), None);
        assert_eq!(parse_hhmm(""), None);
    }

    #[test]
    fn test_same_day_window_is_half_open() {
        let window = OperatingWindow::new("08:00", "17:00");
        assert!(!is_open(&window, at(7, 59)));
        assert!(is_open(&window, at(8, 0)));
        assert!(is_open(&window, at(16, 59)));
        assert!(!is_open(&window, at(17, 0)));
        assert!(!is_open(&window, at(18, 0)));
    }

    #[test]
    fn test_overnight_window() {
        let window = OperatingWindow::new("22:00", "06:00");
        assert!(is_open(&window, at(23, 0)));
        assert!(is_open(&window, at(5, 0)));
        assert!(is_open(&window, at(22, 0)));
        assert!(!is_open(&window, at(6, 0)));
        assert!(!is_open(&window, at(7, 0)));
        assert!(!is_open(&window, at(21, 59)));
    }

    #[test]
    fn test_equal_bounds_always_open() {
        let window = OperatingWindow::new("09:00", "09:00");
        assert!(is_open(&window, at(3, 0)));
        assert!(is_open(&window, at(9, 0)));
        assert!(is_open(&window, at(20, 30)));
    }

    #[test]
    fn test_missing_or_malformed_bounds_fail_open() {
        assert!(is_open(&OperatingWindow::new("", "17:00"), at(23, 0)));
        assert!(is_open(&OperatingWindow::new("08:00", ""), at(3, 0)));
        assert!(is_open(&OperatingWindow::new("8am", "5pm"), at(3, 0)));
        assert!(is_open(&OperatingWindow::new("08:00", "25:00"), at(3, 0)));
    }

    #[test]
    fn test_cutoff() {
        assert!(!is_after_cutoff("16:00", at(15, 59)));
        assert!(is_after_cutoff("16:00", at(16, 0)));
        assert!(is_after_cutoff("16:00", at(23, 0)));
        assert!(!is_after_cutoff("later", at(23, 0)));
        assert!(!is_after_cutoff("", at(23, 0)));
    }
}
