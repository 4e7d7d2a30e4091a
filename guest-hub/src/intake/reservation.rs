//! Table reservation intake
//!
//! ```text
//! People ──► Date ──► Time ──► Occasion ──► Completed
//!   │          │        │          │
//!   └──────────┴────────┴──────────┴──► Cancelled
//! ```
//!
//! A rejected answer keeps the machine on the same step. The caller owns
//! the machine; nothing about an unfinished reservation leaves it.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::hotel::{ReservationDetails, ReservationField};
use shared::request::ReservationRequest;

use super::validate::{FieldRejected, normalize_occasion, validate_date, validate_people, validate_time};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeState {
    People,
    Date { people: String },
    Time { people: String, date: String },
    Occasion { people: String, date: String, time: String },
    Completed(ReservationDetails),
    Cancelled,
}

/// Guest input for the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeInput<'a> {
    Answer(&'a str),
    /// The explicit "no occasion" choice
    NoOccasion,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Answer accepted; prompt for this field next
    Next(ReservationField),
    /// Answer rejected; prompt for the same field again
    Rejected(FieldRejected),
    Completed(ReservationDetails),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationIntake {
    state: IntakeState,
}

impl Default for ReservationIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationIntake {
    pub fn new() -> Self {
        Self {
            state: IntakeState::People,
        }
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    /// Field being asked for, `None` once finished
    pub fn current_field(&self) -> Option<ReservationField> {
        match self.state {
            IntakeState::People => Some(ReservationField::People),
            IntakeState::Date { .. } => Some(ReservationField::Date),
            IntakeState::Time { .. } => Some(ReservationField::Time),
            IntakeState::Occasion { .. } => Some(ReservationField::Occasion),
            IntakeState::Completed(_) | IntakeState::Cancelled => None,
        }
    }

    /// String key of the prompt the client should show now
    pub fn prompt_key(&self) -> Option<&'static str> {
        self.current_field().map(|field| field.prompt_key())
    }

    pub fn is_finished(&self) -> bool {
        self.current_field().is_none()
    }

    pub fn submit(&mut self, input: IntakeInput<'_>) -> StepOutcome {
        if let IntakeInput::Cancel = input {
            if !matches!(self.state, IntakeState::Completed(_)) {
                self.state = IntakeState::Cancelled;
            }
            return self.terminal_outcome().unwrap_or(StepOutcome::Cancelled);
        }

        if let Some(outcome) = self.terminal_outcome() {
            return outcome;
        }

        let answer = match input {
            IntakeInput::Answer(text) => text,
            IntakeInput::NoOccasion | IntakeInput::Cancel => "",
        };

        let state = std::mem::replace(&mut self.state, IntakeState::Cancelled);
        let (next, outcome) = match state {
            IntakeState::People => match validate_people(answer) {
                Ok(people) => (IntakeState::Date { people }, StepOutcome::Next(ReservationField::Date)),
                Err(e) => (IntakeState::People, StepOutcome::Rejected(e)),
            },
            IntakeState::Date { people } => match validate_date(answer) {
                Ok(date) => (
                    IntakeState::Time { people, date },
                    StepOutcome::Next(ReservationField::Time),
                ),
                Err(e) => (IntakeState::Date { people }, StepOutcome::Rejected(e)),
            },
            IntakeState::Time { people, date } => match validate_time(answer) {
                Ok(time) => (
                    IntakeState::Occasion { people, date, time },
                    StepOutcome::Next(ReservationField::Occasion),
                ),
                Err(e) => (IntakeState::Time { people, date }, StepOutcome::Rejected(e)),
            },
            IntakeState::Occasion { people, date, time } => {
                let occasion = match input {
                    IntakeInput::NoOccasion => None,
                    _ => normalize_occasion(answer),
                };
                let details = ReservationDetails {
                    people,
                    date,
                    time,
                    occasion,
                };
                (
                    IntakeState::Completed(details.clone()),
                    StepOutcome::Completed(details),
                )
            }
            finished @ (IntakeState::Completed(_) | IntakeState::Cancelled) => {
                let outcome = match &finished {
                    IntakeState::Completed(details) => StepOutcome::Completed(details.clone()),
                    _ => StepOutcome::Cancelled,
                };
                (finished, outcome)
            }
        };

        self.state = next;
        outcome
    }

    fn terminal_outcome(&self) -> Option<StepOutcome> {
        match &self.state {
            IntakeState::Completed(details) => Some(StepOutcome::Completed(details.clone())),
            IntakeState::Cancelled => Some(StepOutcome::Cancelled),
            _ => None,
        }
    }

    pub fn into_details(self) -> Option<ReservationDetails> {
        match self.state {
            IntakeState::Completed(details) => Some(details),
            _ => None,
        }
    }
}

/// Drive a fresh intake with all four answers of a one-shot submission
///
/// The first rejected field is reported; an absent occasion takes the
/// "no occasion" default.
pub fn collect_reservation(request: &ReservationRequest) -> AppResult<ReservationDetails> {
    let mut intake = ReservationIntake::new();
    let occasion = match request.occasion.as_deref() {
        Some(text) => IntakeInput::Answer(text),
        None => IntakeInput::NoOccasion,
    };

    let inputs = [
        IntakeInput::Answer(&request.people),
        IntakeInput::Answer(&request.date),
        IntakeInput::Answer(&request.time),
        occasion,
    ];

    for input in inputs {
        match intake.submit(input) {
            StepOutcome::Next(_) => continue,
            StepOutcome::Completed(details) => return Ok(details),
            StepOutcome::Rejected(rejected) => {
                return Err(AppError::field_rejected(rejected.field.name(), rejected.to_string()));
            }
            StepOutcome::Cancelled => break,
        }
    }

    Err(AppError::new(ErrorCode::IntakeCancelled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_with_skipped_occasion() {
        let mut intake = ReservationIntake::new();
        assert_eq!(intake.prompt_key(), Some("prompt_people"));

        assert_eq!(intake.submit(IntakeInput::Answer("4")), StepOutcome::Next(ReservationField::Date));
        assert_eq!(
            intake.submit(IntakeInput::Answer("15.06.2025")),
            StepOutcome::Next(ReservationField::Time)
        );
        assert_eq!(
            intake.submit(IntakeInput::Answer("19:30")),
            StepOutcome::Next(ReservationField::Occasion)
        );
        assert_eq!(intake.prompt_key(), Some("prompt_occasion"));

        let outcome = intake.submit(IntakeInput::NoOccasion);
        let expected = ReservationDetails {
            people: "4".into(),
            date: "15.06.2025".into(),
            time: "19:30".into(),
            occasion: None,
        };
        assert_eq!(outcome, StepOutcome::Completed(expected.clone()));
        assert!(intake.is_finished());
        assert_eq!(intake.into_details(), Some(expected));
    }

    #[test]
    fn test_rejected_answer_keeps_step() {
        let mut intake = ReservationIntake::new();
        intake.submit(IntakeInput::Answer("2"));

        match intake.submit(IntakeInput::Answer("32.01.2025")) {
            StepOutcome::Rejected(rejected) => assert_eq!(rejected.field, ReservationField::Date),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(intake.current_field(), Some(ReservationField::Date));

        assert_eq!(
            intake.submit(IntakeInput::Answer("01.02.2025")),
            StepOutcome::Next(ReservationField::Time)
        );
    }

    #[test]
    fn test_blank_people_rejected() {
        let mut intake = ReservationIntake::new();
        assert!(matches!(intake.submit(IntakeInput::Answer("  ")), StepOutcome::Rejected(_)));
        assert!(matches!(intake.submit(IntakeInput::NoOccasion), StepOutcome::Rejected(_)));
        assert_eq!(intake.current_field(), Some(ReservationField::People));
    }

    #[test]
    fn test_blank_occasion_is_no_occasion() {
        let mut intake = ReservationIntake::new();
        intake.submit(IntakeInput::Answer("3"));
        intake.submit(IntakeInput::Answer("10.10.2025"));
        intake.submit(IntakeInput::Answer("20:00"));
        match intake.submit(IntakeInput::Answer("   ")) {
            StepOutcome::Completed(details) => assert_eq!(details.occasion, None),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_cancel_discards_everything() {
        let mut intake = ReservationIntake::new();
        intake.submit(IntakeInput::Answer("4"));
        intake.submit(IntakeInput::Answer("15.06.2025"));

        assert_eq!(intake.submit(IntakeInput::Cancel), StepOutcome::Cancelled);
        assert_eq!(intake.state(), &IntakeState::Cancelled);
        assert_eq!(intake.submit(IntakeInput::Answer("19:30")), StepOutcome::Cancelled);
        assert_eq!(intake.into_details(), None);
    }

    #[test]
    fn test_collect_reservation() {
        let request = ReservationRequest {
            room: Some("12".into()),
            lang: None,
            people: "4".into(),
            date: "15.06.2025".into(),
            time: "19:30".into(),
            occasion: Some("Anniversary".into()),
        };
        let details = collect_reservation(&request).unwrap();
        assert_eq!(details.occasion.as_deref(), Some("Anniversary"));
    }

    #[test]
    fn test_collect_reservation_reports_first_rejected_field() {
        let request = ReservationRequest {
            room: None,
            lang: None,
            people: "4".into(),
            date: "15.06.2025".into(),
            time: "25:00".into(),
            occasion: None,
        };
        let err = collect_reservation(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::IntakeFieldRejected);
        let details = err.details.unwrap();
        assert_eq!(details["field"], "time");
    }
}
