//! The session-aware client and its authenticated request primitive.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::SessionStore;
use crate::clients::{
    ApiError, DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse,
};
use crate::config::ClientConfig;

/// Result of a call that requires a session.
///
/// `Unauthenticated` means either that no token was stored (the call was
/// never sent) or that the backend answered `401` and the session has been
/// cleared. Deciding what to show next is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<T> {
    /// The call went through with a valid session.
    Authenticated(T),
    /// There is no valid session.
    Unauthenticated,
}

impl<T> AuthOutcome<T> {
    /// Returns `true` for [`AuthOutcome::Authenticated`].
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Converts into an `Option`, dropping the reason for absence.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Authenticated(value) => Some(value),
            Self::Unauthenticated => None,
        }
    }

    /// Maps the authenticated value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AuthOutcome<U> {
        match self {
            Self::Authenticated(value) => AuthOutcome::Authenticated(f(value)),
            Self::Unauthenticated => AuthOutcome::Unauthenticated,
        }
    }
}

impl<T> From<AuthOutcome<T>> for Option<T> {
    fn from(outcome: AuthOutcome<T>) -> Self {
        outcome.into_option()
    }
}

/// Outcome of login and registration.
///
/// A rejected attempt is a value, not an error: `error` carries the message
/// the backend gave, or a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Whether the backend accepted the attempt.
    pub success: bool,
    /// Why the attempt was rejected.
    pub error: Option<String>,
}

impl AuthResult {
    /// An accepted attempt.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A rejected attempt with the given message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Client for the jewelry backend.
///
/// Owns the HTTP transport and the [`SessionStore`]. Catalog calls go out
/// unauthenticated; cart, order, and design calls go through
/// [`request`](Self::request), which attaches the bearer token and clears the
/// session on `401`.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync`, making it safe to share across async tasks.
/// Calls do not coordinate: concurrent calls read and write the session
/// independently.
///
/// # Example
///
/// ```rust,ignore
/// use jewelry_api::{ClientConfig, SessionStore, StoreClient};
///
/// let client = StoreClient::new(&ClientConfig::default(), SessionStore::in_memory());
///
/// let result = client.login("ana", "secret").await?;
/// if result.success {
///     let orders = client.list_orders().await?;
///     println!("{} orders", orders.len());
/// }
/// ```
#[derive(Debug)]
pub struct StoreClient {
    http_client: HttpClient,
    session: SessionStore,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a client for the configured backend using `session` for
    /// token and profile storage.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            http_client: HttpClient::new(config),
            session,
        }
    }

    /// Returns the session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a request with the current session attached.
    ///
    /// `Content-Type: application/json` and, when a token is stored,
    /// `Authorization: Bearer <token>` are added. Headers set on the request
    /// win over both. A `401` response clears the session (which navigates
    /// to the login page) and yields [`AuthOutcome::Unauthenticated`]; any
    /// other response is returned untouched. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for network failures, invalid requests, or if
    /// the session cannot be cleared.
    pub async fn request(
        &self,
        mut request: HttpRequest,
    ) -> Result<AuthOutcome<HttpResponse>, ApiError> {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            DataType::Json.as_content_type().to_string(),
        );
        if let Some(token) = self.session.token() {
            headers.insert("authorization".to_string(), token.bearer());
        }
        if let Some(extra) = request.extra_headers.take() {
            headers.extend(extra.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
        }
        request.extra_headers = Some(headers);

        let response = self.http_client.request(request).await?;

        if response.code == 401 {
            tracing::warn!(
                "Request to {} was rejected as unauthorized, clearing session",
                response.path
            );
            self.session.clear_session()?;
            return Ok(AuthOutcome::Unauthenticated);
        }

        Ok(AuthOutcome::Authenticated(response))
    }

    /// Sends an authenticated request and decodes a 2xx body as `T`.
    pub(super) async fn request_typed<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<AuthOutcome<T>, ApiError> {
        match self.request(request).await? {
            AuthOutcome::Authenticated(response) => {
                Ok(AuthOutcome::Authenticated(response.into_typed()?))
            }
            AuthOutcome::Unauthenticated => Ok(AuthOutcome::Unauthenticated),
        }
    }

    /// Sends an authenticated listing request; no session yields an empty list.
    pub(super) async fn request_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        if !self.session.is_authenticated() {
            return Ok(Vec::new());
        }
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        Ok(self
            .request_typed(request)
            .await?
            .into_option()
            .unwrap_or_default())
    }

    /// Sends an unauthenticated request and decodes a 2xx body as `T`.
    pub(super) async fn public_typed<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, ApiError> {
        self.http_client.request(request).await?.into_typed()
    }
}

/// Builds a JSON request carrying `payload` as its body.
pub(super) fn json_request<T: Serialize + ?Sized>(
    method: HttpMethod,
    path: &str,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_value(payload).map_err(|source| ApiError::Encode {
        path: path.to_string(),
        source,
    })?;
    Ok(HttpRequest::builder(method, path)
        .body(body)
        .body_type(DataType::Json)
        .build()?)
}
