//! Restaurant reservation payload

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation intake steps, in collection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    People,
    Date,
    Time,
    Occasion,
}

impl ReservationField {
    pub const fn name(&self) -> &'static str {
        match self {
            ReservationField::People => "people",
            ReservationField::Date => "date",
            ReservationField::Time => "time",
            ReservationField::Occasion => "occasion",
        }
    }

    /// String-table key of the guest prompt for this step
    pub const fn prompt_key(&self) -> &'static str {
        match self {
            ReservationField::People => "prompt_people",
            ReservationField::Date => "prompt_date",
            ReservationField::Time => "prompt_time",
            ReservationField::Occasion => "prompt_occasion",
        }
    }

    /// String-table key and English default of the staff-facing label
    pub const fn label(&self) -> (&'static str, &'static str) {
        match self {
            ReservationField::People => ("res_people", "People"),
            ReservationField::Date => ("res_date", "Date"),
            ReservationField::Time => ("res_time", "Time"),
            ReservationField::Occasion => ("res_occasion", "Occasion"),
        }
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated reservation; only produced by a completed intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub people: String,
    /// `DD.MM.YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// `None` when the guest chose "no occasion" or left it blank
    pub occasion: Option<String>,
}
