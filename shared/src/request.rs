//! Request types for the guest hub API
//!
//! Every request carries its own session context (room, UI language);
//! nothing about a guest is kept between requests.

use serde::{Deserialize, Serialize};

/// Query parameters of the hub page (`/h/{slug}?room=12&lang=de`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HubQuery {
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// A single-tap guest action (`POST /h/{slug}/requests`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestActionRequest {
    /// Catalog key, e.g. `towels`, `late_checkout`
    pub action: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    /// Values for `____` placeholders in the message template, in order
    #[serde(default)]
    pub details: Vec<String>,
}

/// Reservation submission (`POST /h/{slug}/reservation`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    pub people: String,
    pub date: String,
    pub time: String,
    /// `None` selects the localized "no occasion" default
    #[serde(default)]
    pub occasion: Option<String>,
}

/// Free-text question for the chat-reply collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}
