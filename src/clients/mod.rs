//! HTTP client types for the jewelry backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`StoreClient`]: The session-aware client with every resource method
//! - [`AuthOutcome`]: The result of a call that needs a session
//! - [`ApiError`]: The error type shared by all calls
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelry_api::{ClientConfig, SessionStore, StoreClient};
//! use jewelry_api::resources::ProductFilters;
//!
//! let client = StoreClient::new(&ClientConfig::default(), SessionStore::in_memory());
//!
//! let filters = ProductFilters {
//!     category_id: Some(5),
//!     ..Default::default()
//! };
//! let products = client.list_products(&filters).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are sent once. There is no retry, no timeout, and no token
//! refresh; a `401` on an authenticated call clears the session instead.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod store;

pub use errors::{ApiError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use store::{AuthOutcome, AuthResult, StoreClient};
