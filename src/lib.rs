//! # Jewelry API Client
//!
//! A Rust client for a jewelry e-commerce backend: account login and
//! registration, catalog browsing, cart and order management, and AI
//! jewelry design.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A [`SessionStore`] holding the bearer token and cached profile over a
//!   pluggable [`KeyValueStore`](auth::KeyValueStore)
//! - An authenticated request primitive that attaches the token and ends the
//!   session on `401`, returning an explicit [`AuthOutcome`]
//! - Resource methods on [`StoreClient`] for every backend endpoint
//! - Typed payload records in [`resources`]
//! - Presentation helpers in [`presentation`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jewelry_api::{BaseUrl, ClientConfig, SessionStore, StoreClient};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = StoreClient::new(&config, SessionStore::in_memory());
//! assert!(!client.session().is_authenticated());
//! ```
//!
//! ## Sessions
//!
//! Sessions survive restarts when backed by a [`FileStore`](auth::FileStore).
//! Navigation on logout or `401` goes through an injected
//! [`Navigator`](auth::Navigator):
//!
//! ```rust
//! use std::sync::Arc;
//! use jewelry_api::auth::{FileStore, Navigator};
//! use jewelry_api::SessionStore;
//!
//! let dir = std::env::temp_dir().join("jewelry-api-doc");
//! let navigator: Arc<dyn Navigator> = Arc::new(|location: &str| {
//!     println!("navigate to {location}");
//! });
//! let session = SessionStore::new(
//!     Arc::new(FileStore::new(dir.join("session.json"))),
//!     navigator,
//!     "login.html",
//! );
//! # let _ = session;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use jewelry_api::{AuthOutcome, ClientConfig, SessionStore, StoreClient};
//!
//! let client = StoreClient::new(&ClientConfig::default(), SessionStore::in_memory());
//!
//! let login = client.login("ana", "secret").await?;
//! if !login.success {
//!     eprintln!("{}", login.error.unwrap_or_default());
//! }
//!
//! match client.get_cart().await? {
//!     AuthOutcome::Authenticated(cart) => println!("{} items", cart.item_count()),
//!     AuthOutcome::Unauthenticated => println!("please sign in"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and sessions are instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: Requests are never retried

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod presentation;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{SessionStore, User};
pub use config::{AccessToken, BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::{ConfigError, SessionStoreError};

// Re-export HTTP client types
pub use clients::{
    ApiError, AuthOutcome, AuthResult, DataType, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, StoreClient,
};
