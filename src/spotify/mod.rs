//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API: the OAuth 2.0 authorization-code flow
//! and the single top-tracks query this tool needs. It handles all HTTP
//! communication with Spotify and keeps the rest of the application free of
//! wire-format concerns.
//!
//! ## Authentication
//!
//! [`auth`] implements the confidential-client authorization-code flow:
//!
//! 1. **Authorization request**: the user's browser is sent to Spotify's
//!    authorize endpoint with `response_type=code` and the configured scope
//! 2. **Local callback**: a transient HTTP server receives the one redirect
//!    carrying the authorization code and shuts down
//! 3. **Token exchange**: the code is POSTed to the token endpoint with the
//!    client credentials in a base64-encoded `Authorization: Basic` header
//!
//! The authorization code is single-use and short-lived; the exchange
//! happens immediately after the redirect arrives. The resulting token is
//! held in memory for the rest of the run and never persisted.
//!
//! ## Track retrieval
//!
//! [`tracks`] covers `GET /me/top/tracks` with bearer authentication and a
//! fixed page size of 15. A non-200 response degrades to an empty track
//! list rather than an error; the caller decides how loud to be about it.
//!
//! ## Error handling
//!
//! Failures surface as tagged absences ([`crate::types::AuthError`], empty
//! vectors) instead of propagated errors. Nothing here retries; a failed
//! flow is restarted by rerunning the command.

pub mod auth;
pub mod tracks;
