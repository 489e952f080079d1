//! # API Module
//!
//! HTTP endpoints for the transient local callback server. The server only
//! exists while the authorization flow waits for Spotify to redirect the
//! browser back; it serves:
//!
//! - [`callback`] - captures the `code` (or `error`) query parameter of the
//!   one OAuth redirect and releases the waiting flow
//! - [`health`] - a minimal status endpoint for checking that the listener
//!   is up while the browser round-trip is in flight
//!
//! Both handlers are plain async functions wired into an
//! [Axum](https://docs.rs/axum) router by [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
