//! Chat passthrough handler

use axum::{
    Json,
    extract::{Path, State},
};
use shared::request::ChatRequest;
use shared::response::ChatResponse;

use crate::api::guest_context;
use crate::chat::chat_question;
use crate::core::ServerState;
use crate::messaging::Dispatcher;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

const FALLBACK_KEY: &str = "chat_fallback";
const FALLBACK_TEXT: &str = "Please contact reception for more information.";

/// POST /h/{slug}/chat - 转发问题给聊天回复服务
///
/// 服务给出部门和 `opsMessageBG` 时，附带路由后的 WhatsApp 链接
pub async fn ask(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<ApiResponse<ChatResponse>> {
    if payload.question.trim().is_empty() {
        return Err(AppError::with_message(ErrorCode::RequiredField, "question is required")
            .with_detail("field", "question"));
    }
    let service = state
        .chat_service()
        .cloned()
        .ok_or_else(|| AppError::with_message(ErrorCode::ConfigError, "Chat service is not configured"))?;

    let config = state.load_hotel(&slug).await?;
    let reply = service
        .ask(&chat_question(&config, &payload.question))
        .await
        .map_err(|e| {
            tracing::warn!(slug = %config.slug, error = %e, "Chat service failed");
            AppError::upstream(e.to_string())
        })?;

    let guest = guest_context(payload.room, payload.lang);
    let lang = config.ui_language(guest.language());
    let text = reply
        .guest_text()
        .unwrap_or_else(|| config.i18n.get_or(lang, FALLBACK_KEY, FALLBACK_TEXT))
        .to_string();

    let ops_message = reply
        .ops_message_bg
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let dispatch = match (reply.ok, reply.routed_department(), ops_message) {
        (true, Some(department), Some(message)) => {
            let now = state.hotel_now(&config);
            Some(Dispatcher::new(&config, now).message(department, &guest, message))
        }
        _ => None,
    };

    Ok(ApiResponse::success(ChatResponse { reply: text, dispatch }))
}
