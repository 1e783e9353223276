use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use wareflow_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NoSuchEntity(msg) => json_error(StatusCode::NOT_FOUND, "no_such_entity", msg),
        DomainError::InsufficientStock(msg) => {
            json_error(StatusCode::CONFLICT, "insufficient_stock", msg)
        }
        DomainError::CapacityViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "capacity_violation", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
