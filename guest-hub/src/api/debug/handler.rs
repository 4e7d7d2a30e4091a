//! Configuration summary handler
//!
//! Shows which sources are configured and what the default hotel resolves
//! to. Never exposes the source URLs themselves.

use axum::extract::State;
use serde::Serialize;
use shared::hotel::{Department, WifiCredentials};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePresence {
    pub has_config_url: bool,
    pub has_i18n_url: bool,
    pub has_menus_url: bool,
    pub has_chat_reply_url: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfig {
    pub env: SourcePresence,
    pub default_slug: String,
    pub hotels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reception_whatsapp: Option<String>,
    /// Why the default hotel could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/debug-config - 环境变量检查 + 默认酒店摘要
pub async fn summary(State(state): State<ServerState>) -> AppResult<ApiResponse<DebugConfig>> {
    let hotels = &state.config.hotels;
    let sources = hotels.default_sources().cloned().unwrap_or_default();
    let present = |url: &str| !url.trim().is_empty();

    let mut summary = DebugConfig {
        env: SourcePresence {
            has_config_url: present(&sources.settings_url),
            has_i18n_url: present(&sources.strings_url),
            has_menus_url: present(&sources.menus_url),
            has_chat_reply_url: state.config.chat_reply_url.is_some(),
        },
        default_slug: hotels.default_slug().to_string(),
        hotels: hotels.slugs().map(String::from).collect(),
        hotel_name: None,
        cover_image: None,
        location_query: None,
        wifi: None,
        reception_whatsapp: None,
        error: None,
    };

    match state.load_hotel(hotels.default_slug()).await {
        Ok(config) => {
            summary.reception_whatsapp = Some(config.contacts.whatsapp(Department::Reception).to_string());
            summary.hotel_name = Some(config.name);
            summary.cover_image = Some(config.cover_image);
            summary.location_query = Some(config.location_query);
            summary.wifi = Some(config.wifi);
        }
        Err(e) => summary.error = Some(e.message),
    }

    Ok(ApiResponse::success(summary))
}
