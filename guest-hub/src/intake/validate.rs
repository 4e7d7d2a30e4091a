//! Field validators for the reservation intake

use std::sync::LazyLock;

use regex::Regex;
use shared::hotel::ReservationField;
use thiserror::Error;

/// `DD.MM.YYYY` in ASCII digits, day 01–31, month 01–12; no calendar check
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.[0-9]{4}$").expect("valid date regex")
});

/// `HH:MM` in ASCII digits, 00:00–23:59
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct FieldRejected {
    pub field: ReservationField,
    pub reason: &'static str,
}

impl FieldRejected {
    fn new(field: ReservationField, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

pub fn validate_people(input: &str) -> Result<String, FieldRejected> {
    let people = input.trim();
    if people.is_empty() {
        return Err(FieldRejected::new(ReservationField::People, "party size is required"));
    }
    Ok(people.to_string())
}

pub fn validate_date(input: &str) -> Result<String, FieldRejected> {
    let date = input.trim();
    if !DATE_PATTERN.is_match(date) {
        return Err(FieldRejected::new(ReservationField::Date, "expected DD.MM.YYYY"));
    }
    Ok(date.to_string())
}

pub fn validate_time(input: &str) -> Result<String, FieldRejected> {
    let time = input.trim();
    if !TIME_PATTERN.is_match(time) {
        return Err(FieldRejected::new(ReservationField::Time, "expected HH:MM"));
    }
    Ok(time.to_string())
}

/// Free text; blank means no occasion
pub fn normalize_occasion(input: &str) -> Option<String> {
    let occasion = input.trim();
    (!occasion.is_empty()).then(|| occasion.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people() {
        assert_eq!(validate_people(" 4 ").unwrap(), "4");
        assert_eq!(validate_people("two adults").unwrap(), "two adults");
        let err = validate_people("   ").unwrap_err();
        assert_eq!(err.field, ReservationField::People);
    }

    #[test]
    fn test_date() {
        assert_eq!(validate_date("15.06.2025").unwrap(), "15.06.2025");
        assert!(validate_date("31.02.2025").is_ok());
        assert!(validate_date("32.01.2025").is_err());
        assert!(validate_date("00.05.2025").is_err());
        assert!(validate_date("15.13.2025").is_err());
        assert!(validate_date("5.06.2025").is_err());
        assert!(validate_date("15/06/2025").is_err());
        assert!(validate_date("15.06.25").is_err());
    }

    #[test]
    fn test_date_rejects_non_ascii_digits() {
        assert!(validate_date("15.06.２０２５").is_err());
        assert!(validate_date("١٥.06.2025").is_err());
    }

    #[test]
    fn test_time() {
        assert_eq!(validate_time("09:05").unwrap(), "09:05");
        assert!(validate_time("23:59").is_ok());
        assert!(validate_time("00:00").is_ok());
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("9:5").is_err());
        assert!(validate_time("12:60").is_err());
        assert_eq!(validate_time("7:30").unwrap_err().field, ReservationField::Time);
    }

    #[test]
    fn test_time_rejects_non_ascii_digits() {
        assert!(validate_time("1٩:30").is_err());
        assert!(validate_time("０９:05").is_err());
    }

    #[test]
    fn test_occasion() {
        assert_eq!(normalize_occasion(" Birthday "), Some("Birthday".to_string()));
        assert_eq!(normalize_occasion("  "), None);
    }
}
