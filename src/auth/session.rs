//! Client-side session state.
//!
//! A session is the pair (bearer token, cached user profile). The
//! [`SessionStore`] persists both in a [`KeyValueStore`] under fixed keys and
//! clears them together: the cached user is only meaningful while a token is
//! present.

use std::fmt;
use std::sync::Arc;

use crate::auth::navigator::{Navigator, NoopNavigator};
use crate::auth::storage::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
use crate::auth::User;
use crate::config::{AccessToken, ClientConfig, DEFAULT_LOGIN_PAGE};
use crate::error::SessionStoreError;

/// Durable storage of the current session.
///
/// Construct one per process or request context and hand it to the
/// [`StoreClient`](crate::StoreClient); there is no ambient global session.
///
/// # Example
///
/// ```rust
/// use jewelry_api::{AccessToken, SessionStore};
///
/// let session = SessionStore::in_memory();
/// assert!(!session.is_authenticated());
///
/// session.set_token(&AccessToken::new("abc").unwrap()).unwrap();
/// assert!(session.is_authenticated());
///
/// session.clear_session().unwrap();
/// assert!(session.token().is_none());
/// ```
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    login_page: String,
}

impl SessionStore {
    /// Creates a session store over `storage`, navigating with `navigator`
    /// to `login_page` when the session is cleared.
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        login_page: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            navigator,
            login_page: login_page.into(),
        }
    }

    /// Creates a session store that navigates to the configured login page.
    #[must_use]
    pub fn from_config(
        config: &ClientConfig,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(storage, navigator, config.login_page())
    }

    /// Creates a session store backed by a fresh [`MemoryStore`] and a
    /// [`NoopNavigator`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(NoopNavigator),
            DEFAULT_LOGIN_PAGE,
        )
    }

    /// Returns the location navigated to when the session is cleared.
    #[must_use]
    pub fn login_page(&self) -> &str {
        &self.login_page
    }

    /// Returns the persisted bearer token, if any. An empty stored value
    /// counts as no token.
    #[must_use]
    pub fn token(&self) -> Option<AccessToken> {
        self.storage
            .get(TOKEN_KEY)
            .and_then(|raw| AccessToken::new(raw).ok())
    }

    /// Persists the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the storage backend fails.
    pub fn set_token(&self, token: &AccessToken) -> Result<(), SessionStoreError> {
        self.storage.set(TOKEN_KEY, token.as_ref())
    }

    /// Returns `true` iff a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns the cached user profile as raw JSON.
    ///
    /// Missing or malformed data yields `None`; it never fails.
    #[must_use]
    pub fn cached_user_json(&self) -> Option<serde_json::Value> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!("Ignoring malformed cached user: {}", error);
                None
            }
        }
    }

    /// Returns the cached user profile.
    ///
    /// Missing, malformed, or mismatched data yields `None`; it never fails.
    #[must_use]
    pub fn cached_user(&self) -> Option<User> {
        let value = self.cached_user_json()?;
        match serde_json::from_value(value) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::debug!("Ignoring cached user with unexpected shape: {}", error);
                None
            }
        }
    }

    /// Caches a user profile, stored verbatim as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the profile cannot be encoded or the
    /// storage backend fails.
    pub fn cache_user(&self, profile: &serde_json::Value) -> Result<(), SessionStoreError> {
        let json = serde_json::to_string(profile)?;
        self.storage.set(USER_KEY, &json)
    }

    /// Removes both the token and the cached user, then navigates to the
    /// login page.
    ///
    /// Both removals are attempted even if the first fails. Navigation
    /// happens whenever no token remains afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first [`SessionStoreError`] raised by the storage backend.
    pub fn clear_session(&self) -> Result<(), SessionStoreError> {
        let token_removed = self.storage.remove(TOKEN_KEY);
        let user_removed = self.storage.remove(USER_KEY);

        if self.is_authenticated() {
            tracing::warn!("Session token could not be removed");
        } else {
            tracing::info!("Session cleared");
            self.redirect_to_login();
        }

        token_removed.and(user_removed)
    }

    /// Navigates to the login page without touching stored state.
    pub fn redirect_to_login(&self) {
        self.navigator.navigate(&self.login_page);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("login_page", &self.login_page)
            .finish_non_exhaustive()
    }
}

// Verify SessionStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionStore>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn recording_session() -> (SessionStore, Arc<Mutex<Vec<String>>>) {
        let visits = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&visits);
        let session = SessionStore::new(
            Arc::new(MemoryStore::new()),
            Arc::new(move |location: &str| sink.lock().unwrap().push(location.to_string())),
            "login.html",
        );
        (session, visits)
    }

    #[test]
    fn test_token_round_trip() {
        let session = SessionStore::in_memory();
        assert!(session.token().is_none());

        session.set_token(&AccessToken::new("T").unwrap()).unwrap();
        assert_eq!(session.token().unwrap().as_ref(), "T");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_empty_stored_token_is_not_authenticated() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(TOKEN_KEY, "").unwrap();
        let session = SessionStore::new(storage, Arc::new(NoopNavigator), "login.html");

        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_cached_user_round_trip() {
        let session = SessionStore::in_memory();
        let profile = json!({"id": 1, "username": "ana", "email": "ana@example.com"});
        session.cache_user(&profile).unwrap();

        assert_eq!(session.cached_user_json(), Some(profile));
        assert_eq!(session.cached_user().unwrap().username, "ana");
    }

    #[test]
    fn test_malformed_cached_user_fails_soft() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(USER_KEY, "{not json").unwrap();
        let session = SessionStore::new(storage, Arc::new(NoopNavigator), "login.html");

        assert!(session.cached_user_json().is_none());
        assert!(session.cached_user().is_none());
    }

    #[test]
    fn test_cached_user_with_wrong_shape_fails_soft() {
        let session = SessionStore::in_memory();
        session.cache_user(&json!(["not", "a", "user"])).unwrap();

        assert!(session.cached_user_json().is_some());
        assert!(session.cached_user().is_none());
    }

    #[test]
    fn test_clear_session_removes_both_keys_and_navigates_once() {
        let (session, visits) = recording_session();
        session.set_token(&AccessToken::new("T").unwrap()).unwrap();
        session.cache_user(&json!({"id": 1})).unwrap();

        session.clear_session().unwrap();

        assert!(session.token().is_none());
        assert!(session.cached_user_json().is_none());
        assert_eq!(*visits.lock().unwrap(), vec!["login.html".to_string()]);
    }

    /// Memory store whose removal of one key always fails.
    #[derive(Debug)]
    struct FailingRemove {
        inner: MemoryStore,
        key: &'static str,
    }

    impl KeyValueStore for FailingRemove {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
            if key == self.key {
                return Err(SessionStoreError::Poisoned);
            }
            self.inner.remove(key)
        }
    }

    fn session_failing_on(key: &'static str) -> (SessionStore, Arc<Mutex<Vec<String>>>) {
        let visits = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&visits);
        let session = SessionStore::new(
            Arc::new(FailingRemove {
                inner: MemoryStore::new(),
                key,
            }),
            Arc::new(move |location: &str| sink.lock().unwrap().push(location.to_string())),
            "login.html",
        );
        session.set_token(&AccessToken::new("T").unwrap()).unwrap();
        session.cache_user(&json!({"id": 1})).unwrap();
        (session, visits)
    }

    #[test]
    fn test_clear_session_removes_token_even_if_user_removal_fails() {
        let (session, visits) = session_failing_on(USER_KEY);

        let result = session.clear_session();

        assert!(matches!(result, Err(SessionStoreError::Poisoned)));
        assert!(!session.is_authenticated());
        assert_eq!(*visits.lock().unwrap(), vec!["login.html".to_string()]);
    }

    #[test]
    fn test_clear_session_removes_user_even_if_token_removal_fails() {
        let (session, visits) = session_failing_on(TOKEN_KEY);

        let result = session.clear_session();

        assert!(matches!(result, Err(SessionStoreError::Poisoned)));
        assert!(session.cached_user_json().is_none());
        assert!(session.is_authenticated());
        assert!(visits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_redirect_to_login_keeps_state() {
        let (session, visits) = recording_session();
        session.set_token(&AccessToken::new("T").unwrap()).unwrap();

        session.redirect_to_login();

        assert!(session.is_authenticated());
        assert_eq!(visits.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_uses_configured_login_page() {
        let config = ClientConfig::builder()
            .login_page("/account/login")
            .build()
            .unwrap();
        let session = SessionStore::from_config(
            &config,
            Arc::new(MemoryStore::new()),
            Arc::new(NoopNavigator),
        );

        assert_eq!(session.login_page(), "/account/login");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = SessionStore::in_memory();
        session.set_token(&AccessToken::new("secret-token").unwrap()).unwrap();

        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("authenticated: true"));
    }
}
