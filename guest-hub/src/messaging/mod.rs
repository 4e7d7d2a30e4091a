//! Staff messages
//!
//! - [`catalog`] - guest actions and their departments / templates
//! - [`composer`] - room prefix, operator text, helper block
//! - [`links`] - `tel:`, `wa.me` and map search links
//! - [`dispatch`] - routing + composition + link for one request

pub mod catalog;
pub mod composer;
pub mod dispatch;
pub mod links;

pub use catalog::{ACTIONS, GuestAction, actions_for, find_action};
pub use composer::{Composer, HelperLine, compose, fill_blanks, room_prefix};
pub use dispatch::{Dispatcher, GuestContext};
pub use links::{maps_search_link, messaging_link, phone_link};
