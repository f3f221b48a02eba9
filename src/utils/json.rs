use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be an integer id, got {value}")]
    NotAnId { field: &'static str, value: String },
}

/// Reads an integer id out of a request body. Form-style clients send ids
/// as numeric strings, so `"9"` is accepted alongside `9`.
pub fn required_id(body: &Value, field: &'static str) -> Result<i32, FieldError> {
    let invalid = |value: &Value| FieldError::NotAnId {
        field,
        value: value.to_string(),
    };

    match body.get(field) {
        None | Some(Value::Null) => Err(FieldError::Missing(field)),
        Some(value @ Value::Number(number)) => number
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| invalid(value)),
        Some(value @ Value::String(text)) => {
            text.trim().parse::<i32>().map_err(|_| invalid(value))
        }
        Some(other) => Err(invalid(other)),
    }
}
