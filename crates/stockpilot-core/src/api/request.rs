use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::ApiError;

/// A call to the API before it reaches the transport.
///
/// `path` is relative to the client's base address (`/user/profile`).
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append every `(key, value)` pair of a flat serializable value.
    ///
    /// Null fields are skipped; nested objects and arrays are rejected.
    pub fn query_params<P: Serialize>(mut self, params: &P) -> Result<Self, ApiError> {
        let value = serde_json::to_value(params)
            .map_err(|e| ApiError::InvalidRequest(format!("query parameters: {}", e)))?;
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(s) => self.query.push((key, s)),
                        scalar @ (Value::Bool(_) | Value::Number(_)) => {
                            self.query.push((key, scalar.to_string()))
                        }
                        _ => {
                            return Err(ApiError::InvalidRequest(format!(
                                "query parameter {} must be a scalar",
                                key
                            )))
                        }
                    }
                }
            }
            _ => {
                return Err(ApiError::InvalidRequest(
                    "query parameters must be an object".to_string(),
                ))
            }
        }
        Ok(self)
    }

    /// Set a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// The Authorization header, if one has been attached
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Percent-encode a caller-supplied value for use as a single path segment.
pub fn encode_segment(segment: &str) -> String {
    Url::parse("http://localhost/")
        .ok()
        .and_then(|mut url| {
            url.path_segments_mut().ok()?.pop_if_empty().push(segment);
            Some(url.path().trim_start_matches('/').to_string())
        })
        .unwrap_or_default()
}
