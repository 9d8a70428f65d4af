//! HTTP response type for the jewelry backend.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, HttpResponseError};

/// An HTTP response from the backend.
///
/// The body is parsed as JSON when possible. An empty body becomes `{}` and
/// a body that is not JSON is kept as `{"raw_body": "<text>"}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values), keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// The endpoint path that produced this response.
    pub path: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            path: path.into(),
        }
    }

    /// Returns `true` if the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the error message the backend put in the body, if any.
    ///
    /// A string `detail` is returned as is. A validation error list (objects
    /// carrying `msg`) is joined with `"; "`.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self.body.get("detail")? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone()).map_err(|source| ApiError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Decodes the body into `T`, failing on a non-2xx status first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] for a non-2xx status and
    /// [`ApiError::Decode`] if the body does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.error_for_status()?.json()
    }

    /// Converts a non-2xx response into an [`HttpResponseError`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpResponseError`] if the status is not 2xx.
    pub fn error_for_status(self) -> Result<Self, HttpResponseError> {
        if self.is_ok() {
            return Ok(self);
        }
        let message = self.detail().unwrap_or_else(|| match &self.body {
            serde_json::Value::Object(fields) if fields.is_empty() => String::new(),
            other => other
                .get("raw_body")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| other.to_string(), String::from),
        });
        Err(HttpResponseError {
            code: self.code,
            message,
            path: self.path,
        })
    }
}
