//! Structured guest input
//!
//! Currently one flow: the four-step table reservation.

pub mod reservation;
pub mod validate;

pub use reservation::{IntakeInput, IntakeState, ReservationIntake, StepOutcome, collect_reservation};
pub use validate::{FieldRejected, validate_date, validate_people, validate_time};
