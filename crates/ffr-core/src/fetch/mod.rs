//! Chart acquisition from the remote service.
//!
//! The song list and the per-song beatboxes are fetched independently and
//! then merged by position:
//! 1. `fetch_song_list` - one request, strictly parsed
//! 2. `fetch_note_sequences` - one request per level, batched and retried
//! 3. `parse_note_sequences` - lenient per note
//! 4. `merge_charts` - index-aligned pairing

mod beatbox;
mod merge;
mod songlist;

pub use beatbox::*;
pub use merge::*;
pub use songlist::*;

use tracing::info;

use crate::chart::{Chart, SongInfo};
use crate::config::{Endpoints, FetchSettings};
use crate::error::{Error, Result};
use crate::network::{FetchBytes, fetch_batched, fetch_with_retry};

/// Fetch and parse the song list.
pub async fn fetch_song_list<F: FetchBytes>(
    fetcher: &F,
    songlist_url: &str,
    settings: &FetchSettings,
) -> Result<Vec<SongInfo>> {
    info!("Fetching song info data");
    let bytes = fetch_with_retry(fetcher, songlist_url, &settings.retry)
        .await
        .ok_or_else(|| {
            Error::Network(format!("Could not fetch the song list from {}", songlist_url))
        })?;

    let songs = parse_song_list(&bytes)?;
    info!("Parsed {} song info entries", songs.len());
    Ok(songs)
}

/// Fetch the raw beatbox of every level.
///
/// `result[i]` is the payload for `levels[i]`, or `None` if every attempt
/// for that level failed.
pub async fn fetch_note_sequences<F: FetchBytes>(
    fetcher: &F,
    endpoints: &Endpoints,
    levels: &[u32],
    settings: &FetchSettings,
) -> Vec<Option<Vec<u8>>> {
    let urls: Vec<String> = levels
        .iter()
        .map(|&level| endpoints.beatbox_url_for(level))
        .collect();

    info!("Fetching beatbox data for {} songs. This may take a while", urls.len());
    fetch_batched(fetcher, &urls, settings).await
}

/// Run the whole acquisition pipeline and build the chart collection.
pub async fn fetch_charts<F: FetchBytes>(
    fetcher: &F,
    endpoints: &Endpoints,
    settings: &FetchSettings,
) -> Result<Vec<Chart>> {
    let song_infos = fetch_song_list(fetcher, &endpoints.songlist_url, settings).await?;
    let levels: Vec<u32> = song_infos.iter().map(|song| song.level).collect();

    let payloads = fetch_note_sequences(fetcher, endpoints, &levels, settings).await;
    let note_sequences = parse_note_sequences(&levels, &payloads)?;
    info!("Parsed {} beatboxes", note_sequences.len());

    merge_charts(song_infos, note_sequences)
}
