//! Error types for calls against the jewelry backend.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: a non-2xx response on a typed resource call
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`ApiError`]: unified error type returned by every client method
//!
//! A `401 Unauthorized` on an authenticated call is not an error: the session
//! is cleared and the call yields [`AuthOutcome::Unauthenticated`](crate::clients::AuthOutcome).
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelry_api::clients::ApiError;
//!
//! match client.get_product(9).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(ApiError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(ApiError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::SessionStoreError;

/// Error returned when a typed call receives a non-successful response.
///
/// `message` holds the backend's `detail` text when one was sent, otherwise
/// the raw body.
///
/// # Example
///
/// ```rust
/// use jewelry_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Product not found".to_string(),
///     path: "/api/products/77".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Request to /api/products/77 failed with status 404: Product not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request to {path} failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The backend's error message.
    pub message: String,
    /// The endpoint path that was called.
    pub path: String,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use jewelry_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A form body was not a flat JSON object.
    #[error("Form bodies must be a JSON object of scalar values.")]
    InvalidFormBody,

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for client calls.
///
/// Transport failures propagate unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A typed call received a non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body did not match the expected record.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// The endpoint path that was called.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be encoded as JSON.
    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        /// The endpoint path that was called.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The session store could not be updated.
    #[error(transparent)]
    Storage(#[from] SessionStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_path() {
        let error = HttpResponseError {
            code: 404,
            message: "Product not found".to_string(),
            path: "/api/products/77".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("/api/products/77"));
        assert!(message.contains("Product not found"));
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_api_error_wraps_response_transparently() {
        let error: ApiError = HttpResponseError {
            code: 500,
            message: "boom".to_string(),
            path: "/api/cart/".to_string(),
        }
        .into();
        assert!(matches!(error, ApiError::Response(ref e) if e.code == 500));
        assert_eq!(
            error.to_string(),
            "Request to /api/cart/ failed with status 500: boom"
        );
    }

    #[test]
    fn test_api_error_decode_names_path() {
        let source = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let error = ApiError::Decode {
            path: "/api/orders/".to_string(),
            source,
        };
        assert!(error
            .to_string()
            .starts_with("Failed to decode response from /api/orders/"));
    }

    #[test]
    fn test_api_error_from_storage_error() {
        let error: ApiError = SessionStoreError::Poisoned.into();
        assert!(matches!(error, ApiError::Storage(SessionStoreError::Poisoned)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::InvalidFormBody;
        let _ = invalid;

        let api: &dyn std::error::Error = &ApiError::from(InvalidHttpRequestError::MissingBodyType);
        let _ = api;
    }
}
