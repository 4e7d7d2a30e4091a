//! Reservation handler

use axum::{
    Json,
    extract::{Path, State},
};
use shared::hotel::Dispatch;
use shared::request::ReservationRequest;

use crate::api::guest_context;
use crate::core::ServerState;
use crate::intake::collect_reservation;
use crate::messaging::Dispatcher;
use crate::utils::{ApiResponse, AppResult};

/// POST /h/{slug}/reservation - 订座: 四个字段一次提交
///
/// 第一个不合法的字段以 `IntakeFieldRejected` 返回，不生成消息
pub async fn submit(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<ApiResponse<Dispatch>> {
    let config = state.load_hotel(&slug).await?;
    let details = collect_reservation(&payload)?;

    let now = state.hotel_now(&config);
    let guest = guest_context(payload.room, payload.lang);
    let dispatch = Dispatcher::new(&config, now).reservation(&guest, &details);

    tracing::info!(
        slug = %config.slug,
        target = %dispatch.routing.target_department,
        redirected = dispatch.routing.was_redirected_due_to_closure,
        "Reservation dispatched"
    );

    Ok(ApiResponse::success(dispatch))
}
