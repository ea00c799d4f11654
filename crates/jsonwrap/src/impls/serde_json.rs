use std::str::FromStr;

use serde_json::{Number, Value as JsonValue};

#[cfg(feature = "tracing")]
use crate::debug;
use crate::{ParseError, Value};

impl Value {
    /// Decode JSON text.
    ///
    /// Returns `None` if the text is not valid JSON or if it decodes to `null`. `null` entries
    /// of arrays and objects are dropped.
    ///
    /// ```
    /// use jsonwrap::{wrap, Value};
    ///
    /// let value = Value::from_json(r#"{"age": 24, "tags": ["a", null]}"#);
    /// assert_eq!(value, Some(wrap!({"age": 24, "tags": ["a"]})));
    /// assert_eq!(Value::from_json("{"), None);
    /// ```
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn from_json(text: &str) -> Option<Value> {
        match serde_json::from_str::<JsonValue>(text) {
            Ok(decoded) => {
                let value = from_decoded(decoded);
                if value.is_none() {
                    debug!("JSON text decodes to an unsupported value");
                }
                value
            }
            Err(error) => {
                debug!(error = %error, "Failed to decode JSON text");
                None
            }
        }
    }

    /// Decode JSON from bytes, which must be valid UTF-8.
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn from_json_slice(bytes: &[u8]) -> Option<Value> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Value::from_json(text),
            Err(error) => {
                debug!(error = %error, "JSON input is not valid UTF-8");
                None
            }
        }
    }
}

/// Owned counterpart of the classification in `Value::parse`.
fn from_decoded(value: JsonValue) -> Option<Value> {
    match value {
        JsonValue::String(text) => Some(Value::String(text.into())),
        JsonValue::Bool(value) => Some(Value::Bool(value)),
        JsonValue::Number(number) => from_number(&number),
        JsonValue::Object(map) => Some(Value::Map(
            map.into_iter()
                .filter_map(|(key, value)| from_decoded(value).map(|value| (key.into(), value)))
                .collect(),
        )),
        JsonValue::Array(items) => Some(Value::Array(
            items.into_iter().filter_map(from_decoded).collect(),
        )),
        JsonValue::Null => None,
    }
}

#[inline]
fn from_number(number: &Number) -> Option<Value> {
    if let Some(value) = number.as_i64() {
        Some(Value::Int(value))
    } else {
        number.as_f64().map(Value::Float)
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = ParseError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        from_decoded(value).ok_or(ParseError)
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = ParseError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        Value::parse(value).ok_or(ParseError)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::from_json(s).ok_or(ParseError)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        Value::try_from(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
