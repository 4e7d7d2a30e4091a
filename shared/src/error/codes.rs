//! Unified error codes for the guest hub
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Tabular source errors
//! - 2xxx: Hotel / configuration errors
//! - 3xxx: Guest intake errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Source ====================
    /// Tabular source could not be fetched (network / HTTP status)
    SourceUnavailable = 1001,
    /// Required tabular source URL is not configured
    SourceUrlMissing = 1002,

    // ==================== 2xxx: Hotel ====================
    /// Hotel slug unknown or its configuration failed to load
    HotelNotFound = 2001,
    /// Guest action key is not part of the catalog
    UnknownAction = 2002,

    // ==================== 3xxx: Intake ====================
    /// Intake field rejected by its pattern
    IntakeFieldRejected = 3001,
    /// Intake was cancelled by the guest
    IntakeCancelled = 3002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Upstream collaborator failed or answered garbage
    UpstreamError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::RequiredField => "Required field is missing",

            // Source
            ErrorCode::SourceUnavailable => "Tabular source is unavailable",
            ErrorCode::SourceUrlMissing => "Tabular source URL is not configured",

            // Hotel
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::UnknownAction => "Unknown guest action",

            // Intake
            ErrorCode::IntakeFieldRejected => "Field value was rejected",
            ErrorCode::IntakeCancelled => "Input was cancelled",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::UpstreamError => "Upstream service error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::SourceUnavailable),
            1002 => Ok(ErrorCode::SourceUrlMissing),

            2001 => Ok(ErrorCode::HotelNotFound),
            2002 => Ok(ErrorCode::UnknownAction),

            3001 => Ok(ErrorCode::IntakeFieldRejected),
            3002 => Ok(ErrorCode::IntakeCancelled),

            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::UpstreamError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::SourceUnavailable.code(), 1001);
        assert_eq!(ErrorCode::HotelNotFound.code(), 2001);
        assert_eq!(ErrorCode::IntakeFieldRejected.code(), 3001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::HotelNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(1002), Ok(ErrorCode::SourceUrlMissing));
        assert_eq!(ErrorCode::try_from(3002), Ok(ErrorCode::IntakeCancelled));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::HotelNotFound).unwrap();
        assert_eq!(json, "2001");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("4242");
        assert!(result.is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::HotelNotFound.message(), "Hotel not found");
        assert_eq!(
            ErrorCode::SourceUnavailable.message(),
            "Tabular source is unavailable"
        );
    }
}
