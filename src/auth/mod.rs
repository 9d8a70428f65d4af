//! Authentication and session types for the jewelry API client.
//!
//! # Overview
//!
//! - [`SessionStore`]: The bearer token and cached user profile, persisted together
//! - [`KeyValueStore`]: The persistence seam, with [`MemoryStore`] and [`FileStore`]
//! - [`Navigator`]: Receives the "go to the login page" request when a session ends
//! - [`User`] / [`NewUser`]: The profile and registration payload
//!
//! The login and registration calls themselves live on
//! [`StoreClient`](crate::StoreClient).
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jewelry_api::auth::{FileStore, NoopNavigator, SessionStore};
//!
//! let session = SessionStore::new(
//!     Arc::new(FileStore::new(std::env::temp_dir().join("jewelry-session.json"))),
//!     Arc::new(NoopNavigator),
//!     "login.html",
//! );
//! ```

mod navigator;
mod session;
mod storage;
mod user;

pub use navigator::{Navigator, NoopNavigator};
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
pub use user::{Gender, NewUser, User};
