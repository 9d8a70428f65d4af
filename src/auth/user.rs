//! User profile types.
//!
//! [`User`] is the profile returned by `GET /api/auth/me` and cached in the
//! session store after login. [`NewUser`] is the registration payload.
//!
//! # Example
//!
//! ```rust
//! use jewelry_api::User;
//!
//! let user: User = serde_json::from_str(
//!     r#"{"id": 7, "username": "ana", "email": "ana@example.com"}"#,
//! ).unwrap();
//!
//! assert_eq!(user.id, 7);
//! assert_eq!(user.display_name(), "ana");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::timestamp;

/// Gender options accepted by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or unspecified.
    Other,
}

/// A registered user's profile.
///
/// Only `id` is required; the remaining fields default when the backend
/// omits them, so partial profiles still deserialize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user ID.
    pub id: u64,

    /// The login name.
    #[serde(default)]
    pub username: String,

    /// The email address.
    #[serde(default)]
    pub email: String,

    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Date of birth.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub dob: Option<DateTime<Utc>>,

    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// When the account was created.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns "First Last" when a name is on file, the username otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// Registration payload for `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// The login name.
    pub username: String,

    /// The email address.
    pub email: String,

    /// The plain-text password.
    pub password: String,

    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// Verify User is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<User>();
};
