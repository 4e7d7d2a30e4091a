//! Guest request handler

use axum::{
    Json,
    extract::{Path, State},
};
use shared::hotel::Dispatch;
use shared::request::GuestActionRequest;

use crate::api::guest_context;
use crate::core::ServerState;
use crate::messaging::{Dispatcher, find_action};
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /h/{slug}/requests - 单击请求: 路由 + 消息 + WhatsApp 链接
pub async fn create(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(payload): Json<GuestActionRequest>,
) -> AppResult<ApiResponse<Dispatch>> {
    let action = find_action(&payload.action).ok_or_else(|| AppError::unknown_action(&payload.action))?;

    let config = state.load_hotel(&slug).await?;
    let now = state.hotel_now(&config);
    let guest = guest_context(payload.room, payload.lang);

    let dispatch = Dispatcher::new(&config, now).action(action, &guest, &payload.details);
    tracing::info!(
        slug = %config.slug,
        action = action.key,
        target = %dispatch.routing.target_department,
        redirected = dispatch.routing.was_redirected_due_to_closure,
        "Guest request dispatched"
    );

    Ok(ApiResponse::success(dispatch))
}
