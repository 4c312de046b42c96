use axum::response::Response;

use super::{ErrorCode, error_response};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    let code = ErrorCode::NotFound;
    error_response(code.status(), "The requested resource was not found".to_string(), code)
}
