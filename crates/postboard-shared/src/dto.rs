//! Data Transfer Objects - request types for the API.

use serde_json::{Map, Number, Value};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional on the wire; which ones are required is decided
/// by the operation. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPayload {
    pub author: Option<String>,
    pub age: Option<Number>,
    pub content: Option<String>,
    pub picture: Option<String>,
}

impl PostPayload {
    /// Read the known fields out of a parsed JSON body.
    ///
    /// Numbers are accepted for the text fields and numeric strings for
    /// `age`. Any other value, or a body that is not an object, counts as
    /// not supplied.
    pub fn from_json(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };
        Self {
            author: text(object, "author"),
            age: number(object, "age"),
            content: text(object, "content"),
            picture: text(object, "picture"),
        }
    }
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(object: &Map<String, Value>, key: &str) -> Option<Number> {
    match object.get(key)? {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    }
}
