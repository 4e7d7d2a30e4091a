//! 工具模块
//!
//! - [`logger`] - 日志初始化
//! - [`time`] - 酒店本地时间

pub mod logger;
pub mod time;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use time::{Clock, FixedClock, SharedClock, SystemClock};
