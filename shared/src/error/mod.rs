//! Unified error system for the guest hub
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Tabular source errors
//! - 2xxx: Hotel errors
//! - 3xxx: Intake errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::hotel_not_found("demo");
//! assert_eq!(err.code, ErrorCode::HotelNotFound);
//!
//! let err = AppError::field_rejected("date", "Use DD.MM.YYYY")
//!     .with_detail("value", "32.01.2025");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(3001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
