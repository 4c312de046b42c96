//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use utoipa::ToSchema;

/// Client-facing identifier, integer code for logs and a default message.
///
/// Ranges: 1000s for client errors, 2000s for storage, 3000s for migrations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Path identifier is not an integer
    InvalidId,
    /// Body could not be read as the expected JSON document
    JsonExtraction,
    NotFound,

    DatabaseError,
    /// No pooled connection became available in time
    DatabasePoolTimeout,
    DatabaseRecordNotFound,

    MigrationError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,

            Self::DatabaseError => 2003,
            Self::DatabasePoolTimeout => 2013,
            Self::DatabaseRecordNotFound => 2001,

            Self::MigrationError => 3001,
        }
    }

    /// Status answered with this code. JSON extraction keeps the rejection's
    /// own status (400, 415 or 422) and only falls back to this one.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::JsonExtraction => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DatabasePoolTimeout => StatusCode::SERVICE_UNAVAILABLE,
            Self::DatabaseError | Self::DatabaseRecordNotFound | Self::MigrationError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidId => "Identifier must be an integer",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::DatabaseError => "Database error occurred",
            Self::DatabasePoolTimeout => "Database connection pool timed out",
            Self::DatabaseRecordNotFound => "Database record not found",
            Self::MigrationError => "Migration error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_matches_serde() {
        for code in [
            ErrorCode::InvalidId,
            ErrorCode::NotFound,
            ErrorCode::DatabasePoolTimeout,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
        assert_eq!(ErrorCode::MigrationError.code(), 3001);
    }

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::DatabasePoolTimeout.status(), StatusCode::SERVICE_UNAVAILABLE);
        for code in [
            ErrorCode::DatabaseError,
            ErrorCode::DatabaseRecordNotFound,
            ErrorCode::MigrationError,
        ] {
            assert_eq!(code.status(), StatusCode::INTERNAL_SERVER_ERROR, "{code}");
        }
        assert!(ErrorCode::InvalidId.status().is_client_error());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::JsonExtraction.to_string(), "JSON_EXTRACTION");
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"DATABASE_RECORD_NOT_FOUND\"").unwrap();
        assert_eq!(code, ErrorCode::DatabaseRecordNotFound);
    }
}
