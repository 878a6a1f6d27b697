//! Response assertions

use axum::http::StatusCode;
use serde_json::Value;

use super::app::TestResponse;

/// Assert the status and that the body is the standard error shape
pub fn assert_error(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["status"], Value::from(status.as_u16()));
    assert!(response.body["error"].is_string(), "body: {}", response.body);
}

/// Assert no object anywhere in `value` has a key mentioning a password
pub fn assert_no_password_field(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                assert!(
                    !key.to_lowercase().contains("password"),
                    "response leaked field {key}: {value}"
                );
                assert_no_password_field(nested);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_no_password_field),
        _ => {}
    }
}
