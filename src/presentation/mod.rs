//! Presentation helpers for storefront pages.
//!
//! - [`format_currency`]: USD amounts in `en-US` style
//! - [`NotificationCenter`]: auto-dismissing notifications
//! - [`nav_links`] and [`StoreClient::refresh_navigation`](crate::StoreClient::refresh_navigation):
//!   navigation that follows the session

mod currency;
mod navigation;
mod notification;

pub use currency::format_currency;
pub use navigation::{nav_links, NavLink};
pub use notification::{Notification, NotificationCenter, NotificationKind, DISPLAY_DURATION};
