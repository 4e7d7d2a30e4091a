//! Hotel domain types
//!
//! - [`HotelConfiguration`] - assembled per-hotel snapshot
//! - [`Department`] - fixed set of routable service units
//! - [`LocalizedStringTable`] - language → key → text
//! - [`RoutingDecision`] / [`Dispatch`] - where a request goes and what is sent
//! - [`ReservationDetails`] - validated reservation payload
//! - [`ChatQuestion`] / [`ChatReply`] - chat-reply collaborator boundary

pub mod chat;
pub mod config;
pub mod department;
pub mod i18n;
pub mod reservation;
pub mod routing;

pub use chat::{ChatHotelContext, ChatQuestion, ChatReply};
pub use config::{
    Contacts, HotelConfiguration, OperatingWindow, RawRow, ReviewLinks, StaffHelper,
    TaxiProvider, WifiCredentials,
};
pub use department::{Department, UnknownDepartment};
pub use i18n::LocalizedStringTable;
pub use reservation::{ReservationDetails, ReservationField};
pub use routing::{Dispatch, RoutingDecision};
