//! Normalized records returned in [`ResponseMode::Json`] mode.
//!
//! These are built from the raw JSON of the `api.php` endpoints. Field names
//! are `snake_case` and stable across endpoints; the raw names they come from
//! are noted on each field where they differ.

use crate::error::{Result, SaavnError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Whether a call returns the backend JSON untouched or a normalized record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Normalized record (the default).
    #[default]
    Json,
    /// Backend payload, unmodified.
    Raw,
}

impl ResponseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Raw => "raw",
        }
    }
}

impl FromStr for ResponseMode {
    type Err = SaavnError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "raw" => Ok(Self::Raw),
            other => Err(SaavnError::Validation(format!(
                "response should be json or raw, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a public API call: either the raw backend JSON or a
/// normalized record.
///
/// Serializes untagged, so `Raw` serializes to exactly the backend JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Raw(Value),
    Json(T),
}

impl<T> Payload<T> {
    /// The normalized record, if this is a `Json` payload.
    pub fn into_json(self) -> Option<T> {
        match self {
            Self::Json(t) => Some(t),
            Self::Raw(_) => None,
        }
    }

    /// The backend JSON, if this is a `Raw` payload.
    pub fn into_raw(self) -> Option<Value> {
        match self {
            Self::Raw(v) => Some(v),
            Self::Json(_) => None,
        }
    }
}

/// A song.
///
/// Built from a `song.getDetails` entry, an album/playlist `songs` element,
/// or a `search.getResults` result; all three share the same flat shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    /// Raw `song`.
    pub title: String,
    pub album: String,
    /// Raw `albumid`.
    pub album_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_url: Option<String>,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Composers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
    /// Comma-separated artist names.
    pub primary_artists: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_artists_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_artists: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starring: Option<String>,
    /// Cover art, 500x500.
    pub image: String,
    /// Length in seconds.
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
    /// Raw `explicit_content`.
    pub explicit: bool,
    /// Raw `320kbps`.
    pub is_320kbps: bool,
    pub has_lyrics: bool,
    /// Raw `copyright_text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    pub perma_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_preview_url: Option<String>,
    /// Decrypted stream URL at the best available bitrate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Lyric text; only set when lyrics were requested and exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// An album with its track list.
///
/// API JSON: `content.getAlbumDetails` → `{ albumid, title, year,
/// release_date, primary_artists, primary_artists_id, image, perma_url,
/// songs: [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub primary_artists: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_artists_id: Option<String>,
    pub image: String,
    pub perma_url: String,
    pub song_count: u64,
    pub songs: Vec<Song>,
}

/// A playlist with its track list.
///
/// API JSON: `playlist.getDetails` → `{ listid, listname, image, perma_url,
/// follower_count, fan_count, list_count, username, firstname, lastname,
/// songs: [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub image: String,
    pub perma_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_count: Option<u64>,
    pub song_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub songs: Vec<Song>,
}

/// One page of song search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSearch {
    /// Total matches on the server.
    pub total: u64,
    /// Offset of the first result on this page.
    pub start: u64,
    pub songs: Vec<Song>,
}

/// Album search results (the `albums` section of `autocomplete.get`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSearch {
    pub albums: Vec<AlbumHit>,
}

/// A single album search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumHit {
    pub id: String,
    pub title: String,
    /// Raw `music`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<String>,
    pub image: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Raw `more_info.song_pids`, split.
    pub song_ids: Vec<String>,
}

/// Lyrics of a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    /// Full lyric text, one line per `\n`.
    pub lyrics: Option<String>,
    pub lyrics_copyright: Option<String>,
    pub snippet: Option<String>,
}

/// Outcome of a lyrics lookup. A song without lyrics is a normal result,
/// serialized as `{"status": "no lyric"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LyricsResult {
    NotFound { status: String },
    Found(Lyrics),
}

impl LyricsResult {
    pub(crate) fn not_found() -> Self {
        Self::NotFound {
            status: "no lyric".to_owned(),
        }
    }

    /// The lyric text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(l) => l.lyrics.as_deref(),
            Self::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_mode_parsing() {
        assert_eq!("json".parse::<ResponseMode>().unwrap(), ResponseMode::Json);
        assert_eq!("raw".parse::<ResponseMode>().unwrap(), ResponseMode::Raw);
        for bad in ["xml", "JSON", "", "raw "] {
            assert!(matches!(
                bad.parse::<ResponseMode>(),
                Err(SaavnError::Validation(_))
            ));
        }
        assert_eq!(ResponseMode::default(), ResponseMode::Json);
    }

    #[test]
    fn raw_payload_serializes_verbatim() {
        let raw = json!({"a": [1, 2], "b": {"c": null}});
        let payload: Payload<Lyrics> = Payload::Raw(raw.clone());
        assert_eq!(serde_json::to_value(&payload).unwrap(), raw);
    }

    #[test]
    fn no_lyric_shape() {
        let v = serde_json::to_value(LyricsResult::not_found()).unwrap();
        assert_eq!(v, json!({"status": "no lyric"}));
        let back: LyricsResult = serde_json::from_value(v).unwrap();
        assert_eq!(back, LyricsResult::not_found());
        assert_eq!(back.text(), None);
    }
}
