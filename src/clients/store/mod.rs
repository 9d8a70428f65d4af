//! Session-aware client for the jewelry backend.
//!
//! # Overview
//!
//! - [`StoreClient`]: resource methods for auth, catalog, cart, orders, and designs
//! - [`AuthOutcome`]: the result of a call that needs a session
//! - [`AuthResult`]: the result of login and registration
//!
//! # Session Gating
//!
//! | Call | Without a token | On `401` |
//! |---|---|---|
//! | `get_cart` | `Unauthenticated`, no request | session cleared, `Unauthenticated` |
//! | `add_item` | navigates to login, `Unauthenticated`, no request | session cleared, `Unauthenticated` |
//! | `list_orders`, `list_user_designs`, `list_design_requests` | empty list, no request | session cleared, empty list |
//! | other authenticated calls | sent without `Authorization` | session cleared, `Unauthenticated` |
//!
//! Catalog calls never carry the token.

mod auth;
mod cart;
mod catalog;
mod client;
mod designs;
mod orders;

pub use client::{AuthOutcome, AuthResult, StoreClient};
