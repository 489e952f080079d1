use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::{AuthConfig, TabSite},
    error, info, spotify, success, tabs,
    types::{TabResolution, TabTableRow, Track},
    warning,
};

pub async fn find(open: bool) {
    let config = match AuthConfig::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let token = match spotify::auth::authorize(&config).await {
        Ok(t) => t,
        Err(e) => error!("Authorization failed: {}", e),
    };
    success!("Authentication successful!");

    let tracks = spotify::tracks::fetch_top_tracks(&config.api_url, &token.access_token).await;
    if tracks.is_empty() {
        warning!("No top tracks available.");
    }

    let site = TabSite::default();
    let resolutions = resolve_all(&tracks, &site).await;

    let found: Vec<TabTableRow> = tracks
        .iter()
        .zip(resolutions.iter())
        .filter_map(|(track, resolution)| {
            resolution.found().map(|url| TabTableRow {
                artist: track.artist.clone(),
                track: track.name.clone(),
                url: url.to_string(),
            })
        })
        .collect();

    success!("Found tabs for {} of {} tracks.", found.len(), tracks.len());
    if !found.is_empty() {
        let table = Table::new(&found);
        println!("{}", table);
    }

    for (track, resolution) in tracks.iter().zip(resolutions.iter()) {
        if resolution.found().is_none() {
            info!("{} - {}: {}", track.artist, track.name, resolution);
        }
    }

    if open {
        for row in &found {
            if webbrowser::open(&row.url).is_err() {
                warning!("Failed to open {} in browser.", row.url);
            }
        }
    }
}

async fn resolve_all(tracks: &[Track], site: &TabSite) -> Vec<TabResolution> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching for tabs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    // One search per track, serially; the tab site gets no concurrent load.
    let mut resolutions = Vec::with_capacity(tracks.len());
    for track in tracks {
        pb.set_message(format!("Searching tab for {} - {}...", track.artist, track.name));
        resolutions.push(tabs::resolve_tab(track, site).await);
    }

    pb.finish_and_clear();
    resolutions
}
