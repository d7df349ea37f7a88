//! Resource id extraction from fetched page HTML.
//!
//! JioSaavn pages embed their initial state as inline JSON. The id is read
//! from the first pattern that matches; later patterns cover older page
//! layouts that still get served for some resources.

use crate::error::{Result, SaavnError};
use regex::Regex;
use std::sync::LazyLock;

static PAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""page_id","([^"]+)""#).expect("valid regex"));

static SONG_PID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""pid":"([^"]+)""#).expect("valid regex"));

static ALBUM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""album_id":"([^"]+)""#).expect("valid regex"));

static PLAYLIST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""type":"playlist","id":"([^"]+)""#).expect("valid regex")
});

static LIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""listid":"([^"]+)""#).expect("valid regex"));

/// Extract the song id (`pid`) from a song page.
pub fn get_song_id(page: &str) -> Result<String> {
    first_match(page, &[&*SONG_PID, &*PAGE_ID], "song")
}

/// Extract the album id from an album page.
pub fn get_album_id(page: &str) -> Result<String> {
    first_match(page, &[&*ALBUM_ID, &*PAGE_ID], "album")
}

/// Extract the playlist id (`listid`) from a playlist page.
pub fn get_playlist_id(page: &str) -> Result<String> {
    first_match(page, &[&*PLAYLIST_ID, &*LIST_ID, &*PAGE_ID], "playlist")
}

fn first_match(page: &str, patterns: &[&Regex], kind: &str) -> Result<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(page))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| SaavnError::Extraction(kind.to_owned()))
}
