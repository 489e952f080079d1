use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w-]").unwrap());

/// Ultimate Guitar title-search endpoint.
pub const UG_SEARCH_URL: &str = "https://www.ultimate-guitar.com/search.php";

/// Host serving the individual tab pages.
pub const UG_TABS_HOST: &str = "https://tabs.ultimate-guitar.com";

// The site suffixes tab URLs with a type/version part ("chords-123456",
// "guitar-pro-98765"). The exact grammar varies; it lives here so a change
// is one edit plus the tests that pin it.
pub const TAB_SUFFIX_PATTERN: &str = r"[a-z-]+-\d+";

/// Normalizes a name into the hyphenated slug form used in tab page URLs:
/// lowercase, whitespace runs collapsed to single hyphens, everything that
/// is not a word character or hyphen removed. Idempotent.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(lowered.trim(), "-");
    NON_SLUG_RE.replace_all(&hyphenated, "").into_owned()
}

/// Builds the title-search URL for an artist/track pair.
///
/// Both names are lowercased and percent-encoded individually, then joined
/// with a literal `%20` inside the `value` parameter. This is deliberately a
/// different encoding from [`slugify`]: the query carries the human-readable
/// names, the slug form only matters when matching result URLs.
pub fn build_search_url(search_base: &str, artist: &str, track: &str) -> String {
    let artist_enc = urlencoding::encode(&artist.to_lowercase()).into_owned();
    let track_enc = urlencoding::encode(&track.to_lowercase()).into_owned();
    format!(
        "{base}?search_type=title&value={artist}%20{track}",
        base = search_base,
        artist = artist_enc,
        track = track_enc
    )
}

/// Compiles the pattern a tab page URL for this artist/track must match:
/// strict on the artist and track slugs, permissive on the trailing
/// type/version suffix.
pub fn tab_url_pattern(tabs_host: &str, artist: &str, track: &str) -> Regex {
    let pattern = format!(
        r"{host}/tab/{artist}/{track}-{suffix}",
        host = regex::escape(tabs_host),
        artist = slugify(artist),
        track = slugify(track),
        suffix = TAB_SUFFIX_PATTERN
    );
    // Slugs only contain word characters and hyphens, so the pattern is
    // always valid.
    Regex::new(&pattern).unwrap()
}

/// Whether a string is an absolute http(s) URL. Used to refuse search URLs
/// before any network call is made.
pub fn is_absolute_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Splits an http(s) redirect URI into the port the callback server must
/// listen on and the route path it must serve. Ports default to 80/443 by
/// scheme; a missing path becomes `/`. Returns `None` for anything that is
/// not an absolute http(s) URL or carries an unparseable port.
pub fn redirect_endpoint(redirect_uri: &str) -> Option<(u16, String)> {
    let (default_port, rest) = if let Some(rest) = redirect_uri.strip_prefix("http://") {
        (80u16, rest)
    } else if let Some(rest) = redirect_uri.strip_prefix("https://") {
        (443u16, rest)
    } else {
        return None;
    };

    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, format!("/{}", path)),
        None => (rest, "/".to_string()),
    };
    if authority.is_empty() {
        return None;
    }

    let port = match authority.split_once(':') {
        Some((_, port)) => port.parse::<u16>().ok()?,
        None => default_port,
    };

    // Query or fragment parts never reach the route table
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or("/")
        .to_string();

    Some((port, path))
}
