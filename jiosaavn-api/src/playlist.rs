//! Playlist API.
//!
//! Endpoint: `GET api.php?__call=playlist.getDetails&listid={id}`
//!
//! Response:
//! ```json
//! {
//!   "listid": "1134543272",
//!   "listname": "90s Love",
//!   "perma_url": "https://www.jiosaavn.com/s/playlist/.../90s_Love/OykxHSA0YytFo9wdEAzFBA__",
//!   "image": "https://c.saavncdn.com/editorial/90sLove_20220304-150x150.jpg",
//!   "follower_count": "52311", "fan_count": 52311, "list_count": "50",
//!   "uid": "...", "username": "phulki_user", "firstname": "JioSaavn", "lastname": "",
//!   "songs": [ { ...flat song object... } ]
//! }
//! ```

use crate::client::{Fetch, JioSaavnClient, Target, finish};
use crate::error::Result;
use crate::extract::get_playlist_id;
use crate::fields::{hires_image, opt_text, opt_u64, text};
use crate::song::parse_song;
use crate::types::{Payload, Playlist, ResponseMode};
use crate::validate::is_playlist_url;
use serde_json::Value;

impl<F: Fetch> JioSaavnClient<F> {
    /// Get playlist metadata and its songs from a playlist page `url` or a
    /// playlist `id`. With `lyrics` set, lyrics are merged into each song.
    pub fn playlist(
        &self,
        url: Option<&str>,
        id: Option<&str>,
        lyrics: bool,
        mode: ResponseMode,
    ) -> Result<Payload<Playlist>> {
        let id = self.resolve_id(Target {
            url,
            id,
            kind: "playlist",
            noun: "a playlist",
            is_valid: is_playlist_url,
            extract: get_playlist_id,
            page_params: &[],
        })?;
        let raw = self.get_json(&self.endpoints().playlist(&id))?;
        finish(raw, mode, |raw| {
            let mut playlist = parse_playlist(raw);
            if lyrics {
                self.attach_lyrics(&mut playlist.songs)?;
            }
            Ok(playlist)
        })
    }
}

fn parse_playlist(v: &Value) -> Playlist {
    let songs: Vec<_> = v["songs"]
        .as_array()
        .map(|arr| arr.iter().map(parse_song).collect())
        .unwrap_or_default();
    Playlist {
        id: text(v, "listid"),
        title: text(v, "listname"),
        image: hires_image(&text(v, "image")),
        perma_url: text(v, "perma_url"),
        follower_count: opt_u64(v, "follower_count"),
        fan_count: opt_u64(v, "fan_count"),
        song_count: opt_u64(v, "list_count").unwrap_or(songs.len() as u64),
        username: opt_text(v, "username"),
        firstname: opt_text(v, "firstname"),
        lastname: opt_text(v, "lastname"),
        songs,
    }
}
