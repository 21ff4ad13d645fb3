use common::util::{digits_only, parse_bool_text};
use serde_json::{Map, Number, Value};
use std::ops::Deref;

/// Decoded top level JSON object of the response. Fields are looked up by name
/// only, nested paths are not supported.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    inner: Map<String, Value>,
}

impl Document {
    pub fn new(inner: Map<String, Value>) -> Self {
        Document { inner }
    }

    pub fn from_slice(content: &[u8]) -> Result<Self, String> {
        let body: Value = serde_json::from_slice(content)
            .map_err(|err| format!("Err {} when parsing response", err))?;
        match body {
            Value::Object(inner) => Ok(Document { inner }),
            other => Err(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            )),
        }
    }

    pub fn get_field(&self, field: &str) -> Option<FieldValue> {
        self.inner.get(field).map(FieldValue::from)
    }
}

impl Deref for Document {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Map<String, Value> {
        &self.inner
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A field value as it arrived in the document. Numbers and booleans may come
/// as native JSON or as text, the conversions below treat both the same.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
    Composite(Value),
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text.clone()),
            Value::Number(number) => FieldValue::Number(number.clone()),
            Value::Bool(flag) => FieldValue::Bool(*flag),
            Value::Null => FieldValue::Null,
            other => FieldValue::Composite(other.clone()),
        }
    }
}

impl FieldValue {
    /// Text used for comparisons and messages.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => number.to_string(),
            FieldValue::Bool(flag) => flag.to_string(),
            FieldValue::Null => "null".to_string(),
            FieldValue::Composite(value) => value.to_string(),
        }
    }

    /// The value as a non-negative integer, only when its text is digit-only.
    pub fn as_digits(&self) -> Option<f64> {
        let text = self.as_text();
        digits_only(&text).and_then(|digits| digits.parse::<f64>().ok())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(flag) => Some(*flag),
            other => parse_bool_text(&other.as_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_from_slice() {
        let document = Document::from_slice(br#"{"status": "green", "count": 3}"#).unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(
            document.get_field("status"),
            Some(FieldValue::Text("green".to_string()))
        );
        assert_eq!(document.get_field("missing"), None);
    }

    #[test]
    fn test_document_rejects_non_object() {
        assert_eq!(
            Document::from_slice(b"[1, 2]"),
            Err("expected a JSON object, got an array".to_string())
        );
        assert!(Document::from_slice(b"<html>").is_err());
    }

    #[test]
    fn test_field_value_text() {
        assert_eq!(FieldValue::from(&json!("yellow")).as_text(), "yellow");
        assert_eq!(FieldValue::from(&json!(150)).as_text(), "150");
        assert_eq!(FieldValue::from(&json!(1.5)).as_text(), "1.5");
        assert_eq!(FieldValue::from(&json!(true)).as_text(), "true");
        assert_eq!(FieldValue::from(&json!(null)).as_text(), "null");
        assert_eq!(FieldValue::from(&json!({"a": 1})).as_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_field_value_digits() {
        assert_eq!(FieldValue::from(&json!(150)).as_digits(), Some(150.0));
        assert_eq!(FieldValue::from(&json!("150")).as_digits(), Some(150.0));
        assert_eq!(FieldValue::from(&json!(-5)).as_digits(), None);
        assert_eq!(FieldValue::from(&json!(2.5)).as_digits(), None);
        assert_eq!(FieldValue::from(&json!("abc")).as_digits(), None);
        assert_eq!(FieldValue::from(&json!(true)).as_digits(), None);
    }

    #[test]
    fn test_field_value_bool() {
        assert_eq!(FieldValue::from(&json!(true)).as_bool(), Some(true));
        assert_eq!(FieldValue::from(&json!("FALSE ")).as_bool(), Some(false));
        assert_eq!(FieldValue::from(&json!("maybe")).as_bool(), None);
        assert_eq!(FieldValue::from(&json!(1)).as_bool(), None);
    }
}
