//! Conversions between YAML values and plain text

use serde_yaml::Value;

/// Render a scalar as plain text. Returns `None` for null, sequences, and
/// mappings.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Interpret command-line text the way YAML would read a scalar, so `3`
/// becomes an integer and `true` a boolean.
///
/// A typed value is only used when it prints back to exactly `text`; anything
/// else (`1.10`, `010`, `yes`, non-scalars) is kept as the literal string.
pub fn parse_scalar(text: &str) -> Value {
    match serde_yaml::from_str::<Value>(text) {
        Ok(value @ (Value::Bool(_) | Value::Number(_)))
            if scalar_text(&value).as_deref() == Some(text) =>
        {
            value
        }
        _ => Value::String(text.to_string()),
    }
}
