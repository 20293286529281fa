//! Free-form course attributes stored as a single JSON column.
//!
//! [`CourseAttrs::encode`] and [`CourseAttrs::decode`] are the only place the
//! persistence layer turns attributes into column values and back. The pair is
//! lossless: `decode(encode(a)) == a` for every `a`.

use coursebyte_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("attributes are not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("attributes must be a JSON object, got {0}")]
    Shape(&'static str),
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        AppError::bad_request(err)
    }
}

/// A JSON object of arbitrary course attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseAttrs(Map<String, Value>);

impl CourseAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON wire form of the attributes. Never fails: any JSON map serializes.
    pub fn encode(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CodecError::Shape(kind(&other))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for CourseAttrs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for CourseAttrs {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CodecError::Shape(kind(&other))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CourseAttrs {
        CourseAttrs::try_from(json!({
            "level": "beginner",
            "weeks": 12,
            "tags": ["rust", "systems"],
            "syllabus": {"week1": "ownership", "week2": null},
            "price": 19.5
        }))
        .unwrap()
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let attrs = sample();
        let decoded = CourseAttrs::decode(attrs.encode().as_bytes()).unwrap();
        assert_eq!(decoded, attrs);
    }

    #[test]
    fn test_empty_attrs_encode_to_empty_object() {
        assert_eq!(CourseAttrs::new().encode(), "{}");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = CourseAttrs::decode(b"{not json").unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = CourseAttrs::decode(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CodecError::Shape("an array")));

        let err = CourseAttrs::decode(b"null").unwrap_err();
        assert!(matches!(err, CodecError::Shape("null")));
    }

    #[test]
    fn test_decode_error_is_bad_request() {
        let err: AppError = CourseAttrs::decode(b"\"text\"").unwrap_err().into();
        assert_eq!(err.status.as_u16(), 400);
    }

    #[test]
    fn test_serializes_transparently() {
        let mut attrs = CourseAttrs::new();
        attrs.insert("level", json!("advanced"));
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({"level": "advanced"}));
    }
}
