/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation error in field 'username': ...",
 *   "status": 400,
 *   "field": "username"
 * }
 * ```
 *
 * `field` is only present for validation errors.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let mut body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        if let BackendError::SharedError(err) = &self {
            if let Some(field) = err.field() {
                body["field"] = serde_json::Value::String(field.to_string());
            }
        }

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found", "status": 404 })),
    )
        .into_response()
}
