//! Homework records and the status translator.

use serde_json::Value;
use tracing::error;

use crate::error::{json_type_name, ShapeError, TranslateError};

use super::status::HomeworkStatus;

const NAME_KEY: &str = "homework_name";
const STATUS_KEY: &str = "status";
const RECORD: &str = "homework record";

/// One submission under review, as far as the notifier cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extract a record from one element of the `homeworks` list.
    ///
    /// Unknown statuses surface as [`TranslateError::UnknownStatus`] rather
    /// than being logged and dropped here.
    pub fn from_value(value: &Value) -> Result<Self, TranslateError> {
        let Some(fields) = value.as_object() else {
            return Err(shape(ShapeError::WrongType {
                what: RECORD,
                expected: "a mapping",
                found: json_type_name(value),
            }));
        };

        let name = required_str(fields, NAME_KEY)?;
        let status = required_str(fields, STATUS_KEY)?;

        let status = status.parse::<HomeworkStatus>().map_err(|e| {
            error!("Unknown homework status received: {e}");
            e
        })?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// Chat message announcing this record's status.
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Translate a raw record into the message sent to chat.
pub fn parse_status(value: &Value) -> Result<String, TranslateError> {
    HomeworkRecord::from_value(value).map(|record| record.message())
}

fn required_str<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, TranslateError> {
    match fields.get(key) {
        None => Err(shape(ShapeError::MissingKey { key, what: RECORD })),
        Some(Value::Null) => Err(shape(ShapeError::NullValue { key, what: RECORD })),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(shape(ShapeError::WrongType {
            what: key,
            expected: "a string",
            found: json_type_name(other),
        })),
    }
}

fn shape(err: ShapeError) -> TranslateError {
    error!("Malformed homework record: {err}");
    TranslateError::Shape(err)
}
