/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::Asset;
use serde_json::Value;

/// Returns the string value of `field`, `None` when missing, null or not a string
pub fn field_str<'a>(asset: &'a Asset, field: &str) -> Option<&'a str> {
    asset.get(field).and_then(Value::as_str)
}

/// Truthiness of `field`: missing, null, `false`, `0` and `""` are false
pub fn field_truthy(asset: &Asset, field: &str) -> bool {
    match asset.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Renders a JSON value as a CSV cell
///
/// Strings are written verbatim, null as an empty cell, everything else in
/// its compact JSON form.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compares `field` with an expected value, treating numbers and strings alike
/// by their text, e.g. a shooting day of `3` matches `"3"`
pub fn field_matches(asset: &Asset, field: &str, expected: &str) -> bool {
    match asset.get(field) {
        None | Some(Value::Null) => false,
        Some(value) => value_to_cell(value) == expected,
    }
}
