use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token as returned by the token endpoint. Expiry is not tracked;
/// the token only lives for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Query parameters captured from the single OAuth redirect.
#[derive(Debug, Clone, Default)]
pub struct AuthCallback {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Why the authorization flow ended without a usable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The redirect carried an `error` parameter, no `code`, or never arrived.
    NoCode,
    /// The token endpoint answered with a non-200 status or an unparseable body.
    TokenExchangeFailed,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NoCode => write!(f, "no authorization code received"),
            AuthError::TokenExchangeFailed => write!(f, "token exchange failed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// One ranked track, reduced to the pair the tab search needs.
/// Ordering follows the provider's ranking (most-played first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        let artist = item
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default();
        Track {
            name: item.name,
            artist,
        }
    }
}

/// Per-track outcome of the search pipeline. Every absence keeps its cause
/// so callers can report or test each stage separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabResolution {
    /// A tab page was found and answered the reachability check.
    Found(String),
    /// The derived search URL was not an absolute http(s) URL; no request was made.
    InvalidSearchUrl,
    /// The search results page could not be fetched (non-200 or transport error).
    FetchFailed,
    /// The results page contained no URL matching the expected slug shape.
    NoMatch,
    /// A tab URL was found but the HEAD check did not answer 200.
    Unreachable,
}

impl TabResolution {
    pub fn found(&self) -> Option<&str> {
        match self {
            TabResolution::Found(url) => Some(url),
            _ => None,
        }
    }
}

impl std::fmt::Display for TabResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabResolution::Found(url) => write!(f, "found: {}", url),
            TabResolution::InvalidSearchUrl => write!(f, "invalid search URL"),
            TabResolution::FetchFailed => write!(f, "search page fetch failed"),
            TabResolution::NoMatch => write!(f, "no matching tab"),
            TabResolution::Unreachable => write!(f, "tab URL unreachable"),
        }
    }
}

#[derive(Tabled)]
pub struct TabTableRow {
    pub artist: String,
    pub track: String,
    pub url: String,
}
