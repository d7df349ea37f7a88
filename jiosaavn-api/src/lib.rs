//! JioSaavn web API client library.
//!
//! Search songs and albums, and fetch song, album, playlist and lyrics
//! metadata, either by id or from a public `www.jiosaavn.com` page URL. No
//! login is needed.
//!
//! ```no_run
//! use jiosaavn_api::{JioSaavnClient, ResponseMode};
//!
//! let client = JioSaavnClient::new().unwrap();
//! let song = client.song(None, Some("veJXEDAz"), true, ResponseMode::Json).unwrap();
//! println!("{}", serde_json::to_string_pretty(&song).unwrap());
//! ```
//!
//! Every call takes a [`ResponseMode`]: `Json` returns a normalized record
//! from [`types`], `Raw` returns the backend JSON exactly as received.
//!
//! # API endpoint mapping
//!
//! | Method                            | `__call`                  | Description        |
//! |-----------------------------------|---------------------------|--------------------|
//! | [`JioSaavnClient::search_song`]   | `search.getResults`       | Search songs       |
//! | [`JioSaavnClient::search_album`]  | `autocomplete.get`        | Search albums      |
//! | [`JioSaavnClient::song`]          | `song.getDetails`         | Song metadata      |
//! | [`JioSaavnClient::album`]         | `content.getAlbumDetails` | Album with songs   |
//! | [`JioSaavnClient::playlist`]      | `playlist.getDetails`     | Playlist with songs|
//! | [`JioSaavnClient::lyrics`]        | `lyrics.getLyrics`        | Song lyrics        |

mod album;
pub mod client;
pub mod config;
mod crypto;
pub mod endpoint;
pub mod error;
pub mod extract;
mod fields;
mod lyrics;
mod playlist;
mod search;
mod song;
#[cfg(test)]
mod testing;
pub mod types;
pub mod validate;

pub use client::{Fetch, HttpFetcher, JioSaavnClient};
pub use config::Config;
pub use endpoint::Endpoints;
pub use error::{Result, SaavnError};
pub use extract::{get_album_id, get_playlist_id, get_song_id};
pub use search::MAX_SEARCH_LIMIT;
pub use types::{
    Album, AlbumHit, AlbumSearch, Lyrics, LyricsResult, Payload, Playlist, ResponseMode, Song,
    SongSearch,
};
pub use validate::{is_album_url, is_playlist_url, is_song_url};
