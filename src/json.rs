//! Bridge between the object model's JSON values and host-side JSON objects.
//!
//! The two representations are connected through their serialized text form
//! rather than structural traversal, so both sides stay free to evolve their
//! internal storage independently.

use crate::text::{EncodingError, decode_wide, encode_wide};
use serde_json::{Map, Value};

/// A host-side JSON object handle.
///
/// Always an object: conversions that fail to produce one fall back to the
/// empty object instead of erroring, mirroring how a renderer treats a
/// malformed `additionalProperties` bag as simply having none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject {
    entries: Map<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses serialized JSON text. On parse failure or a non-object result,
    /// yields the empty object.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(entries)) => Self { entries },
            Ok(other) => {
                log::debug!("non-object JSON ({}) replaced with empty object", kind(&other));
                Self::new()
            }
            Err(err) => {
                log::debug!("unparseable JSON replaced with empty object: {err}");
                Self::new()
            }
        }
    }

    /// Parses serialized JSON text held as UTF-16 code units.
    pub fn from_wide_text(text: &[u16]) -> Result<Self, EncodingError> {
        Ok(Self::from_text(&decode_wide(text)?))
    }

    /// Converts an object-model value. Non-object values yield the empty
    /// object, like [`JsonObject::from_text`].
    pub fn from_value(value: &Value) -> Self {
        Self::from_text(&value.to_string())
    }

    /// Serializes back to compact JSON text.
    pub fn to_text(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }

    /// Serializes to JSON text as UTF-16 code units.
    pub fn to_wide_text(&self) -> Result<Vec<u16>, EncodingError> {
        encode_wide(self.to_text().as_bytes())
    }

    /// Converts back into an object-model value by re-parsing the serialized
    /// form.
    pub fn to_value(&self) -> Value {
        match serde_json::from_str(&self.to_text()) {
            Ok(value) => value,
            Err(_) => Value::Object(Map::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_text_parses_an_object() {
        let object = JsonObject::from_text(r#"{"title": "hello", "count": 3}"#);
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("title"), Some(&json!("hello")));
        assert_eq!(object.get("count"), Some(&json!(3)));
    }

    #[test]
    fn test_malformed_text_yields_empty_object() {
        assert!(JsonObject::from_text("{not json").is_empty());
        assert!(JsonObject::from_text("").is_empty());
    }

    #[test]
    fn test_non_object_text_yields_empty_object() {
        assert!(JsonObject::from_text("[1, 2, 3]").is_empty());
        assert!(JsonObject::from_text("\"just a string\"").is_empty());
        assert!(JsonObject::from_text("42").is_empty());
        assert!(JsonObject::from_text("null").is_empty());
    }

    #[test]
    fn test_text_round_trip() {
        let object = JsonObject::from_text(r#"{"a": {"nested": true}, "b": [1, "x"]}"#);
        let round_tripped = JsonObject::from_text(&object.to_text());
        assert_eq!(round_tripped, object);
    }

    #[test]
    fn test_value_bridge_round_trip() {
        let value = json!({"speak": "hi", "body": [{"type": "TextBlock"}]});
        let object = JsonObject::from_value(&value);
        assert_eq!(object.to_value(), value);
    }

    #[test]
    fn test_from_value_with_non_object_yields_empty_object() {
        assert!(JsonObject::from_value(&json!([1, 2])).is_empty());
        assert!(JsonObject::from_value(&json!(null)).is_empty());
    }

    #[test]
    fn test_wide_text_round_trip() {
        let object = JsonObject::from_text(r#"{"glyph": "カード"}"#);
        let wide = object.to_wide_text().unwrap();
        assert_eq!(JsonObject::from_wide_text(&wide).unwrap(), object);
    }

    #[test]
    fn test_empty_object_serializes_as_braces() {
        assert_eq!(JsonObject::new().to_text(), "{}");
    }

    #[test]
    fn test_insert_and_get() {
        let mut object = JsonObject::new();
        object.insert("key", json!("value"));
        assert_eq!(object.get("key"), Some(&json!("value")));
        assert_eq!(object.len(), 1);
    }
}
