//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // Fatal configuration loads surface to guests as "not found"
            Self::HotelNotFound | Self::UnknownAction => StatusCode::NOT_FOUND,

            Self::IntakeFieldRejected => StatusCode::UNPROCESSABLE_ENTITY,

            Self::SourceUnavailable | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            Self::UpstreamError => StatusCode::BAD_GATEWAY,

            Self::InternalError | Self::ConfigError | Self::SourceUrlMissing => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes() {
        assert_eq!(ErrorCode::HotelNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UnknownAction.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_intake_codes() {
        assert_eq!(
            ErrorCode::IntakeFieldRejected.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::IntakeCancelled.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_system_codes() {
        assert_eq!(
            ErrorCode::SourceUnavailable.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::UpstreamError.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::ConfigError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
