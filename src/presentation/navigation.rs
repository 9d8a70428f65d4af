//! Navigation links that depend on the session.

use crate::clients::StoreClient;

/// A link in the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    /// The login page.
    Login,
    /// The cart page.
    Cart,
    /// The profile page.
    Profile,
    /// Ends the session via [`StoreClient::logout`].
    Logout,
}

impl NavLink {
    /// Returns the link target. `Logout` has no page of its own.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Login => "login.html",
            Self::Cart => "cart.html",
            Self::Profile => "profile.html",
            Self::Logout => "#",
        }
    }

    /// Returns the link title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Cart => "Cart",
            Self::Profile => "Profile",
            Self::Logout => "Logout",
        }
    }
}

const SIGNED_IN_LINKS: &[NavLink] = &[NavLink::Cart, NavLink::Profile, NavLink::Logout];
const SIGNED_OUT_LINKS: &[NavLink] = &[NavLink::Login, NavLink::Cart];

/// Returns the navigation links for a signed-in or signed-out visitor.
#[must_use]
pub const fn nav_links(signed_in: bool) -> &'static [NavLink] {
    if signed_in {
        SIGNED_IN_LINKS
    } else {
        SIGNED_OUT_LINKS
    }
}

impl StoreClient {
    /// Returns the navigation links for the current session.
    ///
    /// A visitor counts as signed in when a user profile is cached.
    #[must_use]
    pub fn refresh_navigation(&self) -> &'static [NavLink] {
        nav_links(self.session().cached_user_json().is_some())
    }
}
