//! Error types for the jewelry API client.
//!
//! This module contains the configuration errors raised while building a
//! [`ClientConfig`](crate::ClientConfig) and the errors raised by session
//! storage backends.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use jewelry_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("localhost:8000");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'http://localhost:8000').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty.")]
    EmptyAccessToken,

    /// Login page cannot be empty.
    #[error("Login page cannot be empty. Please provide the location to navigate to when the session ends.")]
    EmptyLoginPage,
}

/// Errors raised by a [`KeyValueStore`](crate::auth::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the backing file failed.
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded as JSON.
    #[error("Session storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the storage lock.
    #[error("Session storage lock was poisoned")]
    Poisoned,
}
