//! Shared types for the guest hub
//!
//! Domain types used across crates: the assembled hotel configuration,
//! routing and reservation payloads, request/response DTOs and the unified
//! error system.

pub mod error;
pub mod hotel;
pub mod request;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use hotel::{Department, HotelConfiguration, RoutingDecision};
