//! Hotel departments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of hotel service units a guest request can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Reception,
    Housekeeping,
    Restaurant,
    Events,
    Maintenance,
}

impl Department {
    /// All departments, reception first
    pub const ALL: [Department; 5] = [
        Department::Reception,
        Department::Housekeeping,
        Department::Restaurant,
        Department::Events,
        Department::Maintenance,
    ];

    /// Key used in settings tables (`<key>Whatsapp`, `<key>_open`, ...)
    pub const fn key(&self) -> &'static str {
        match self {
            Department::Reception => "reception",
            Department::Housekeeping => "housekeeping",
            Department::Restaurant => "restaurant",
            Department::Events => "events",
            Department::Maintenance => "maintenance",
        }
    }

    pub const fn is_reception(&self) -> bool {
        matches!(self, Department::Reception)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown department key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}
