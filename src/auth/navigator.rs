//! Navigation hook invoked when the session ends.
//!
//! A browser client redirects to its login page when the session is cleared.
//! This crate has no window to redirect, so the embedding application injects
//! a [`Navigator`] and decides what "go to the login page" means for it.

/// Receives navigation requests raised by the client.
///
/// Any `Fn(&str) + Send + Sync` closure is a `Navigator`.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use jewelry_api::auth::Navigator;
///
/// let visited = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&visited);
/// let navigator = move |location: &str| sink.lock().unwrap().push(location.to_string());
///
/// navigator.navigate("login.html");
/// assert_eq!(*visited.lock().unwrap(), vec!["login.html".to_string()]);
/// ```
pub trait Navigator: Send + Sync {
    /// Navigates to `location`.
    fn navigate(&self, location: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, location: &str) {
        self(location);
    }
}

/// A [`Navigator`] that only records the request in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, location: &str) {
        tracing::debug!("Navigation to {} requested; no navigator installed", location);
    }
}
