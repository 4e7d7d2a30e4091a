//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`hub`] - 酒店首页数据
//! - [`requests`] - 单击服务请求
//! - [`reservation`] - 餐厅订座
//! - [`chat`] - 聊天回复转发
//! - [`debug`] - 配置诊断

pub mod chat;
pub mod debug;
pub mod health;
pub mod hub;
pub mod requests;
pub mod reservation;

use axum::Router;
use axum::middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::messaging::GuestContext;
use crate::utils::logger::ACCESS_TARGET;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: ACCESS_TARGET, "{} {} {}", method, uri, status);

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(hub::router())
        .merge(requests::router())
        .merge(reservation::router())
        .merge(chat::router())
        .merge(debug::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and the integration tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // CORS - the guest page may be served from another origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// Session context of a guest request
pub(crate) fn guest_context(room: Option<String>, lang: Option<String>) -> GuestContext {
    let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    GuestContext::new(clean(room), clean(lang))
}
