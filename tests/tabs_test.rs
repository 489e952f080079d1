use tabscout::tabs::extract_tab_url;
use tabscout::utils::UG_TABS_HOST;
use tabscout::types::{TabResolution, Token, TopTracksResponse, Track};

const SEARCH_FIXTURE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Search results</title></head>
<body>
<div class="js-store" data-content="{&quot;results&quot;:[...]}">
  Some unrelated link: https://tabs.ultimate-guitar.com/tab/other-band/some-song-chords-11111
  <a href="https://tabs.ultimate-guitar.com/tab/the-artist/song-name-chords-123456">Song Name</a>
  <a href="https://tabs.ultimate-guitar.com/tab/the-artist/song-name-tabs-654321">Song Name (ver 2)</a>
</div>
</body>
</html>
"#;

#[test]
fn test_extract_tab_url_from_fixture() {
    let url = extract_tab_url(SEARCH_FIXTURE, UG_TABS_HOST, "The Artist", "Song Name");
    assert_eq!(
        url.as_deref(),
        Some("https://tabs.ultimate-guitar.com/tab/the-artist/song-name-chords-123456")
    );
}

#[test]
fn test_extract_tab_url_takes_first_match() {
    // Two versions in the fixture; the first one in document order wins
    let url = extract_tab_url(SEARCH_FIXTURE, UG_TABS_HOST, "The Artist", "Song Name").unwrap();
    assert!(url.ends_with("chords-123456"));
}

#[test]
fn test_extract_tab_url_scans_outside_anchors() {
    // The match is not restricted to href attributes
    let url = extract_tab_url(SEARCH_FIXTURE, UG_TABS_HOST, "Other Band", "Some Song");
    assert_eq!(
        url.as_deref(),
        Some("https://tabs.ultimate-guitar.com/tab/other-band/some-song-chords-11111")
    );
}

#[test]
fn test_extract_tab_url_absent_for_unrelated_pair() {
    let url = extract_tab_url(SEARCH_FIXTURE, UG_TABS_HOST, "Nobody", "Nothing");
    assert_eq!(url, None);
}

#[test]
fn test_extract_tab_url_empty_document() {
    assert_eq!(extract_tab_url("", UG_TABS_HOST, "The Artist", "Song Name"), None);
}

#[test]
fn test_top_tracks_response_parses_in_ranking_order() {
    let json = r#"{
        "items": [
            {"name": "Song Name", "artists": [{"name": "The Artist"}, {"name": "Featured"}]},
            {"name": "Second Song", "artists": [{"name": "Another Artist"}]}
        ]
    }"#;

    let response: TopTracksResponse = serde_json::from_str(json).unwrap();
    let tracks: Vec<Track> = response.items.into_iter().map(Track::from).collect();

    assert_eq!(tracks.len(), 2);
    // Insertion order is the provider's ranking; first artist is the track's artist
    assert_eq!(tracks[0].name, "Song Name");
    assert_eq!(tracks[0].artist, "The Artist");
    assert_eq!(tracks[1].name, "Second Song");
    assert_eq!(tracks[1].artist, "Another Artist");
}

#[test]
fn test_track_without_artists_gets_empty_artist() {
    let json = r#"{"items": [{"name": "Orphan", "artists": []}]}"#;
    let response: TopTracksResponse = serde_json::from_str(json).unwrap();
    let track = Track::from(response.items.into_iter().next().unwrap());

    assert_eq!(track.artist, "");
}

#[test]
fn test_token_response_parses_access_token() {
    let json = r#"{
        "access_token": "BQC-token",
        "token_type": "Bearer",
        "scope": "user-top-read",
        "expires_in": 3600
    }"#;

    let token: Token = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "BQC-token");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_token_response_tolerates_minimal_body() {
    // Only access_token is required; the rest defaults
    let token: Token = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.expires_in, 0);
}

#[test]
fn test_resolution_found_accessor() {
    let found = TabResolution::Found("https://tabs.ultimate-guitar.com/tab/a/b-chords-1".into());
    assert_eq!(
        found.found(),
        Some("https://tabs.ultimate-guitar.com/tab/a/b-chords-1")
    );

    for missing in [
        TabResolution::InvalidSearchUrl,
        TabResolution::FetchFailed,
        TabResolution::NoMatch,
        TabResolution::Unreachable,
    ] {
        assert_eq!(missing.found(), None);
    }
}

#[tokio::test]
async fn test_resolve_tab_url_rejects_relative_input_without_network() {
    // A non-absolute search URL must short-circuit before any request
    let outcome = tabscout::tabs::resolve_tab_url("search.php?value=x", UG_TABS_HOST, "The Artist", "Song Name").await;
    assert_eq!(outcome, TabResolution::InvalidSearchUrl);

    let outcome = tabscout::tabs::resolve_tab_url("ftp://host/search", UG_TABS_HOST, "The Artist", "Song Name").await;
    assert_eq!(outcome, TabResolution::InvalidSearchUrl);
}
