use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything a user handler reads from the incoming request, already pulled
/// out of the framework types.
#[derive(Clone, Debug, Default)]
pub struct UserRequest {
    pub id: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UserRequest {
    pub fn new(id: Option<String>, headers: &HeaderMap, body: Bytes) -> Self {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Self { id, content_type, body }
    }

    pub fn is_json(&self) -> bool {
        self.content_type.as_deref() == Some(JSON_CONTENT_TYPE)
    }

    /// Body decoded as a JSON object. An empty body reads as `{}`.
    pub fn json_object(&self) -> Result<Map<String, Value>, String> {
        if self.body.is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_slice::<Value>(&self.body).map_err(|e| e.to_string())? {
            Value::Object(map) => Ok(map),
            other => Err(format!("expected a JSON object, found {}", json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
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
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn only_exact_json_media_type_counts() {
        let body = Bytes::from_static(b"{}");
        assert!(UserRequest::new(None, &with_content_type("application/json"), body.clone()).is_json());
        assert!(!UserRequest::new(None, &with_content_type("application/json; charset=utf-8"), body.clone()).is_json());
        assert!(!UserRequest::new(None, &with_content_type("text/plain"), body.clone()).is_json());
        assert!(!UserRequest::new(None, &HeaderMap::new(), body).is_json());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        let request = UserRequest::new(None, &HeaderMap::new(), Bytes::from_static(b"[1,2]"));
        assert_eq!(request.json_object().unwrap_err(), "expected a JSON object, found an array");
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let request = UserRequest::new(None, &HeaderMap::new(), Bytes::new());
        assert!(request.json_object().unwrap().is_empty());
    }
}
