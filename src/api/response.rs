//! Shape checks for review API responses.

use serde_json::Value;
use tracing::error;

use crate::error::{json_type_name, ShapeError};

const RESPONSE: &str = "API response";

/// Check a decoded response and return its `homeworks` list.
///
/// Elements are returned as-is; each is checked later by the translator.
/// Every failure is logged here, so callers need not log it again.
pub fn check_response(response: &Value) -> Result<&[Value], ShapeError> {
    let Some(fields) = response.as_object() else {
        return Err(logged(ShapeError::WrongType {
            what: RESPONSE,
            expected: "a mapping",
            found: json_type_name(response),
        }));
    };

    let Some(homeworks) = fields.get("homeworks") else {
        return Err(logged(ShapeError::MissingKey {
            key: "homeworks",
            what: RESPONSE,
        }));
    };

    match homeworks {
        Value::Array(list) => Ok(list),
        other => Err(logged(ShapeError::WrongType {
            what: "\"homeworks\"",
            expected: "a list",
            found: json_type_name(other),
        })),
    }
}

fn logged(err: ShapeError) -> ShapeError {
    error!("Unexpected API response shape: {err}");
    err
}
