//! Reservation API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/h/{slug}/reservation", post(handler::submit))
}
