//! Song detail API.
//!
//! Endpoint: `GET api.php?__call=song.getDetails&pids={id}`
//!
//! Response (a map keyed by song id):
//! ```json
//! {
//!   "veJXEDAz": {
//!     "id": "veJXEDAz", "song": "Alone", "album": "Alone",
//!     "albumid": "10496527", "year": "2016", "language": "english",
//!     "primary_artists": "Alan Walker", "singers": "Alan Walker",
//!     "image": "https://c.saavncdn.com/.../Alone-English-2016-150x150.jpg",
//!     "duration": "161", "320kbps": "true", "has_lyrics": "false",
//!     "explicit_content": 0, "play_count": "1234567",
//!     "encrypted_media_url": "ID2ieOjCrwfgWvL5sXl4B1ImC5QfbsDy...",
//!     "perma_url": "https://www.jiosaavn.com/song/alone/FCAhRAdpdFc",
//!     ...
//!   }
//! }
//! ```
//!
//! The same flat song object appears in album and playlist `songs` arrays
//! and in `search.getResults`, so [`parse_song`] is shared by all of them.

use crate::client::{Fetch, JioSaavnClient, Target, finish};
use crate::crypto::decrypt_media_url;
use crate::error::{Result, SaavnError};
use crate::extract::get_song_id;
use crate::fields::{flag, hires_image, opt_text, opt_u64, text};
use crate::types::{Payload, ResponseMode, Song};
use crate::validate::is_song_url;
use serde_json::Value;
use tracing::warn;

/// Song pages only embed the full payload when asked for the 320 kbps view.
pub(crate) const SONG_PAGE_PARAMS: &[(&str, &str)] = &[("bitrate", "320")];

pub(crate) fn song_target<'a>(url: Option<&'a str>, id: Option<&'a str>) -> Target<'a> {
    Target {
        url,
        id,
        kind: "song",
        noun: "a song",
        is_valid: is_song_url,
        extract: get_song_id,
        page_params: SONG_PAGE_PARAMS,
    }
}

impl<F: Fetch> JioSaavnClient<F> {
    /// Get song metadata from a song page `url` or a song `id`.
    ///
    /// With `lyrics` set, the lyric text is fetched too (when the song has
    /// any) and stored in [`Song::lyrics`].
    ///
    /// # Errors
    ///
    /// - [`SaavnError::Validation`] — neither `url` nor `id` given
    /// - [`SaavnError::InvalidUrl`] — `url` is not a song page
    /// - [`SaavnError::Extraction`] — no id found on the page
    /// - [`SaavnError::NotFound`] — the API has no song with that id
    /// - [`SaavnError::Http`] — network failure
    pub fn song(
        &self,
        url: Option<&str>,
        id: Option<&str>,
        lyrics: bool,
        mode: ResponseMode,
    ) -> Result<Payload<Song>> {
        let id = self.resolve_id(song_target(url, id))?;
        let raw = self.get_json(&self.endpoints().song(&id))?;
        finish(raw, mode, |raw| {
            let entry = raw
                .get(&id)
                .ok_or_else(|| SaavnError::NotFound(format!("song {id}")))?;
            let mut song = parse_song(entry);
            if lyrics {
                self.attach_lyrics(std::slice::from_mut(&mut song))?;
            }
            Ok(song)
        })
    }

    /// Fill in [`Song::lyrics`] for every song that reports having lyrics.
    pub(crate) fn attach_lyrics(&self, songs: &mut [Song]) -> Result<()> {
        for song in songs.iter_mut().filter(|s| s.has_lyrics) {
            song.lyrics = self.lyrics_by_id(&song.id)?.text().map(String::from);
        }
        Ok(())
    }
}

/// Normalize one flat song object.
pub(crate) fn parse_song(v: &Value) -> Song {
    let is_320kbps = flag(v, "320kbps");
    let media_url = v["encrypted_media_url"]
        .as_str()
        .filter(|s| !s.is_empty())
        .and_then(|enc| match decrypt_media_url(enc, is_320kbps) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(id = v["id"].as_str(), error = %e, "could not decrypt media url");
                None
            }
        });

    Song {
        id: text(v, "id"),
        title: text(v, "song"),
        album: text(v, "album"),
        album_id: text(v, "albumid"),
        album_url: opt_text(v, "album_url"),
        year: text(v, "year"),
        release_date: opt_text(v, "release_date"),
        language: text(v, "language"),
        label: opt_text(v, "label"),
        music: opt_text(v, "music"),
        primary_artists: text(v, "primary_artists"),
        primary_artists_id: opt_text(v, "primary_artists_id"),
        featured_artists: opt_text(v, "featured_artists"),
        singers: opt_text(v, "singers"),
        starring: opt_text(v, "starring"),
        image: hires_image(&text(v, "image")),
        duration: opt_u64(v, "duration").unwrap_or(0),
        play_count: opt_u64(v, "play_count"),
        explicit: flag(v, "explicit_content"),
        is_320kbps,
        has_lyrics: flag(v, "has_lyrics"),
        copyright: opt_text(v, "copyright_text"),
        perma_url: text(v, "perma_url"),
        media_preview_url: opt_text(v, "media_preview_url"),
        media_url,
        lyrics: None,
    }
}
