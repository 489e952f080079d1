//! Configuration management for tabscout.
//!
//! This module loads configuration from environment variables and an optional
//! `.env` file in the working directory. The two Spotify client credentials
//! are required; everything else has a sensible default that matches the
//! redirect URI registered for the application.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. Application defaults (for all non-secret values)

use std::env;

use crate::utils;

/// Default Spotify OAuth authorization endpoint (`SPOTIFY_AUTH_URL`).
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Default Spotify OAuth token exchange endpoint (`SPOTIFY_TOKEN_URL`).
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL (`SPOTIFY_API_URL`).
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// OAuth scope required to read the user's top tracks.
pub const SPOTIFY_SCOPE: &str = "user-top-read";

const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing `.env` files are not an error; in that case the process
/// environment alone is used.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Everything the authorization flow needs, resolved once from the
/// environment and passed explicitly instead of being read ad hoc.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Spotify application client ID (`SPOTIFY_CLIENT_ID`).
    pub client_id: String,
    /// Spotify application client secret (`SPOTIFY_CLIENT_SECRET`).
    pub client_secret: String,
    /// Redirect URI registered with the Spotify application
    /// (`SPOTIFY_REDIRECT_URI`, default `http://localhost:8080/callback`).
    pub redirect_uri: String,
    /// Bind address for the local callback server, derived from the
    /// redirect URI's port (`SERVER_ADDRESS` override must agree).
    pub server_address: String,
    /// Route path of the callback endpoint, derived from the redirect URI.
    pub callback_path: String,
    /// OAuth authorization endpoint.
    pub auth_url: String,
    /// OAuth token exchange endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Requested OAuth scope.
    pub scope: String,
}

impl AuthConfig {
    /// Builds the configuration from the process environment.
    ///
    /// The callback bind address and route path are derived from the
    /// redirect URI so the listener always serves the endpoint Spotify
    /// redirects to. A `SERVER_ADDRESS` override is honored for the bind
    /// host but must carry the redirect URI's port.
    ///
    /// # Errors
    ///
    /// Returns an error message naming the first missing required variable
    /// (`SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET`), an unparseable
    /// redirect URI, or a `SERVER_ADDRESS` whose port disagrees with the
    /// redirect URI.
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| "SPOTIFY_CLIENT_ID must be set".to_string())?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| "SPOTIFY_CLIENT_SECRET must be set".to_string())?;

        let redirect_uri = env::var("SPOTIFY_REDIRECT_URI")
            .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());
        let server_address = env::var("SERVER_ADDRESS").ok();
        let (server_address, callback_path) = callback_binding(&redirect_uri, server_address)?;

        Ok(AuthConfig {
            client_id,
            client_secret,
            redirect_uri,
            server_address,
            callback_path,
            auth_url: env::var("SPOTIFY_AUTH_URL")
                .unwrap_or_else(|_| SPOTIFY_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| SPOTIFY_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| SPOTIFY_API_URL.to_string()),
            scope: SPOTIFY_SCOPE.to_string(),
        })
    }
}

/// Resolves the callback server's bind address and route path from the
/// redirect URI, keeping the two in agreement.
///
/// The listener binds all interfaces on the redirect URI's port and serves
/// the redirect URI's path. A `server_address` override keeps its host but
/// is rejected when its port differs from the redirect URI's; such a pair
/// would leave the browser redirecting to a port nobody listens on.
pub fn callback_binding(
    redirect_uri: &str,
    server_address: Option<String>,
) -> Result<(String, String), String> {
    let (port, path) = utils::redirect_endpoint(redirect_uri)
        .ok_or_else(|| format!("Cannot parse redirect URI: {}", redirect_uri))?;

    let address = match server_address {
        Some(address) => {
            let bound_port = address
                .rsplit(':')
                .next()
                .and_then(|p| p.parse::<u16>().ok())
                .ok_or_else(|| format!("Cannot parse server address: {}", address))?;
            if bound_port != port {
                return Err(format!(
                    "SERVER_ADDRESS port {} does not match redirect URI port {}",
                    bound_port, port
                ));
            }
            address
        }
        None => format!("0.0.0.0:{}", port),
    };

    Ok((address, path))
}

/// Endpoints of the tablature site. Carried as a value so tests can point
/// the resolver at a local server; the defaults are the live site.
#[derive(Debug, Clone)]
pub struct TabSite {
    /// Title-search endpoint.
    pub search_url: String,
    /// Host serving the individual tab pages.
    pub tabs_host: String,
}

impl Default for TabSite {
    fn default() -> Self {
        TabSite {
            search_url: utils::UG_SEARCH_URL.to_string(),
            tabs_host: utils::UG_TABS_HOST.to_string(),
        }
    }
}
