use reqwest::Client;

use crate::{
    types::{TopTracksResponse, Track},
    warning,
};

/// Fixed page size of the top-tracks query.
pub const TOP_TRACKS_LIMIT: u32 = 15;

/// Retrieves the user's top tracks, most-played first.
///
/// Issues a single GET against `{api_url}/me/top/tracks` with bearer
/// authentication and the fixed limit of 15. Each item is reduced to its
/// name and first listed artist. Any non-200 answer or parse failure
/// degrades to an empty list; the caller only sees tracks it can actually
/// search for.
pub async fn fetch_top_tracks(api_url: &str, token: &str) -> Vec<Track> {
    let request_url = format!(
        "{uri}/me/top/tracks?limit={limit}",
        uri = api_url,
        limit = TOP_TRACKS_LIMIT
    );

    let client = Client::new();
    let response = match client.get(&request_url).bearer_auth(token).send().await {
        Ok(resp) if resp.status().is_success() => resp,
        Ok(resp) => {
            warning!("Top tracks request answered {}.", resp.status());
            return Vec::new();
        }
        Err(e) => {
            warning!("Top tracks request failed: {}", e);
            return Vec::new();
        }
    };

    match response.json::<TopTracksResponse>().await {
        Ok(res) => res.items.into_iter().map(Track::from).collect(),
        Err(e) => {
            warning!("Cannot parse top tracks response: {}", e);
            Vec::new()
        }
    }
}
