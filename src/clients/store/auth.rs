//! Login, registration, and the current-user profile.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{json_request, AuthResult, StoreClient};
use crate::auth::User;
use crate::clients::{ApiError, DataType, HttpMethod, HttpRequest, HttpResponse};
use crate::config::AccessToken;

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const ME_PATH: &str = "/api/auth/me";

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: AccessToken,
}

impl StoreClient {
    /// Logs in with form-encoded credentials.
    ///
    /// On success the returned token is stored, then the profile is fetched
    /// once with [`fetch_current_user`](Self::fetch_current_user). A failed
    /// profile fetch is logged and otherwise ignored; the login still counts
    /// as successful.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, if a 2xx body carries no
    /// usable `access_token`, or if the token cannot be stored. A rejected
    /// login is `Ok` with `success == false`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResult, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, LOGIN_PATH)
            .body(json!({ "username": username, "password": password }))
            .body_type(DataType::Form)
            .build()?;

        let response = self.http_client().request(request).await?;
        if !response.is_ok() {
            return Ok(rejected(&response, LOGIN_FALLBACK));
        }

        let TokenResponse { access_token } = response.json()?;
        self.session().set_token(&access_token)?;
        tracing::info!("Logged in as {}", username);

        if let Err(error) = self.fetch_current_user().await {
            tracing::debug!("Ignoring failed profile fetch after login: {}", error);
        }

        Ok(AuthResult::succeeded())
    }

    /// Fetches the signed-in user's profile and caches it.
    ///
    /// The stored token is sent directly, bypassing
    /// [`request`](Self::request): a `401` here leaves the session alone.
    /// Returns `None` when no token is stored or the backend refuses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, if the profile cannot be
    /// cached, or if it does not decode as a [`User`].
    pub async fn fetch_current_user(&self) -> Result<Option<User>, ApiError> {
        let Some(token) = self.session().token() else {
            return Ok(None);
        };

        let request = HttpRequest::builder(HttpMethod::Get, ME_PATH)
            .header("Authorization", token.bearer())
            .build()?;
        let response = self.http_client().request(request).await?;
        if !response.is_ok() {
            tracing::debug!("Profile fetch returned status {}", response.code);
            return Ok(None);
        }

        self.session().cache_user(&response.body)?;
        response.json().map(Some)
    }

    /// Registers a new account with a JSON payload such as
    /// [`NewUser`](crate::auth::NewUser). No token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or if the payload cannot be
    /// encoded. A rejected registration is `Ok` with `success == false`.
    pub async fn register<T: Serialize + ?Sized>(
        &self,
        user_data: &T,
    ) -> Result<AuthResult, ApiError> {
        let request = json_request(HttpMethod::Post, REGISTER_PATH, user_data)?;
        let response = self.http_client().request(request).await?;
        if response.is_ok() {
            Ok(AuthResult::succeeded())
        } else {
            Ok(rejected(&response, REGISTER_FALLBACK))
        }
    }

    /// Ends the session: removes the token and cached user, then navigates
    /// to the login page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the session cannot be cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        tracing::info!("Logging out");
        self.session().clear_session()?;
        Ok(())
    }
}

fn rejected(response: &HttpResponse, fallback: &str) -> AuthResult {
    AuthResult::failed(response.detail().unwrap_or_else(|| fallback.to_string()))
}
