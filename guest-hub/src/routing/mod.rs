//! Time-aware request routing
//!
//! Pure functions of the configuration and the hotel-local time; callers
//! compute "now" once per request.

pub mod hours;
pub mod resolver;

pub use hours::{is_after_cutoff, is_open, parse_hhmm};
pub use resolver::{is_department_open, resolve};
