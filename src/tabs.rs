//! Ultimate Guitar search and tab URL resolution.
//!
//! One search-results fetch per track, a regex scan over the whole document
//! for the first URL matching the artist/track slug shape, and a HEAD
//! request to confirm the page actually exists. Each stage that fails maps
//! to its own [`TabResolution`] variant.

use reqwest::{Client, redirect::Policy};

use crate::{
    config::TabSite,
    types::{TabResolution, Track},
    utils,
};

/// Resolves one track to a tab page URL, or the reason there is none.
///
/// Pipeline: build the search URL, fetch the results page, extract the
/// first URL matching the slug shape, HEAD-check it. The first failing
/// stage decides the outcome; nothing is retried.
pub async fn resolve_tab(track: &Track, site: &TabSite) -> TabResolution {
    let search_url = utils::build_search_url(&site.search_url, &track.artist, &track.name);

    let resolution = resolve_tab_url(&search_url, &site.tabs_host, &track.artist, &track.name).await;
    let url = match resolution {
        TabResolution::Found(url) => url,
        other => return other,
    };

    if verify_reachable(&url).await {
        TabResolution::Found(url)
    } else {
        TabResolution::Unreachable
    }
}

/// Fetches a search-results page and extracts the first matching tab URL.
///
/// Refuses non-absolute URLs without touching the network. A non-200 answer
/// or transport error is `FetchFailed`; a fetched page without a matching
/// URL is `NoMatch`.
pub async fn resolve_tab_url(
    search_url: &str,
    tabs_host: &str,
    artist: &str,
    track: &str,
) -> TabResolution {
    if !utils::is_absolute_http_url(search_url) {
        return TabResolution::InvalidSearchUrl;
    }

    let client = Client::new();
    let response = match client.get(search_url).send().await {
        Ok(resp) if resp.status().is_success() => resp,
        _ => return TabResolution::FetchFailed,
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return TabResolution::FetchFailed,
    };

    match extract_tab_url(&body, tabs_host, artist, track) {
        Some(url) => TabResolution::Found(url),
        None => TabResolution::NoMatch,
    }
}

/// Scans a search-results document for the first tab URL matching the
/// artist/track slug shape. The scan runs over the full markup rather than
/// only anchor hrefs; the slug pattern is strict enough to reject unrelated
/// hits wherever they appear.
pub fn extract_tab_url(html: &str, tabs_host: &str, artist: &str, track: &str) -> Option<String> {
    let pattern = utils::tab_url_pattern(tabs_host, artist, track);
    pattern.find(html).map(|m| m.as_str().to_string())
}

/// Confirms a tab URL answers 200 to a HEAD request. Redirects are not
/// followed; anything but a plain 200 counts as unreachable.
pub async fn verify_reachable(url: &str) -> bool {
    let client = match Client::builder().redirect(Policy::none()).build() {
        Ok(client) => client,
        Err(_) => return false,
    };

    match client.head(url).send().await {
        Ok(resp) => resp.status() == reqwest::StatusCode::OK,
        Err(_) => false,
    }
}
