//! Hub page handler

use axum::extract::{Path, Query, State};
use shared::request::HubQuery;
use shared::response::HubPage;

use crate::api::guest_context;
use crate::core::ServerState;
use crate::hub::build_hub_page;
use crate::utils::{ApiResponse, AppResult};

/// GET /h/{slug}?room=&lang= - 酒店首页数据
pub async fn page(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Query(query): Query<HubQuery>,
) -> AppResult<ApiResponse<HubPage>> {
    let config = state.load_hotel(&slug).await?;
    let now = state.hotel_now(&config);
    let guest = guest_context(query.room, query.lang);

    Ok(ApiResponse::success(build_hub_page(&config, &guest, now)))
}
