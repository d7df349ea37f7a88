//! Search API.
//!
//! ## Songs — `GET api.php?__call=search.getResults&q={query}&p={page}&n={limit}`
//!
//! - `p` — page number (1-based)
//! - `n` — results per page (the web player never asks for 30 or more)
//!
//! Response:
//! ```json
//! {
//!   "query": "alone", "total": 1450, "start": 1,
//!   "results": [ { ...flat song object, see `song`... } ]
//! }
//! ```
//!
//! ## Albums — `GET api.php?__call=autocomplete.get&query={query}`
//!
//! The autocomplete endpoint returns top hits for every entity type; only the
//! `albums` section is used.
//!
//! ```json
//! {
//!   "albums": {
//!     "data": [{
//!       "id": "10496527", "title": "Alone", "image": "https://...-50x50.jpg",
//!       "music": "Alan Walker", "url": "https://www.jiosaavn.com/album/alone/...",
//!       "type": "album", "description": "2016 · English Album",
//!       "more_info": { "year": "2016", "is_movie": "0", "language": "english",
//!                      "song_pids": "veJXEDAz, 1Cj4mIcV" }
//!     }],
//!     "position": 2
//!   },
//!   "songs": { ... }, "playlists": { ... }, "artists": { ... }, "topquery": { ... }
//! }
//! ```

use crate::client::{Fetch, JioSaavnClient, finish};
use crate::error::{Result, SaavnError};
use crate::fields::{hires_image, opt_text, opt_u64, text};
use crate::song::parse_song;
use crate::types::{AlbumHit, AlbumSearch, Payload, ResponseMode, SongSearch};
use serde_json::Value;

/// Exclusive upper bound for the `limit` of a song search.
pub const MAX_SEARCH_LIMIT: u32 = 30;

impl<F: Fetch> JioSaavnClient<F> {
    /// Search songs. `page` starts at 1; `limit` must be in `1..30`.
    ///
    /// # Errors
    ///
    /// - [`SaavnError::Validation`] — `page` or `limit` out of range
    /// - [`SaavnError::Http`] — network failure
    pub fn search_song(
        &self,
        query: &str,
        page: u32,
        limit: u32,
        mode: ResponseMode,
    ) -> Result<Payload<SongSearch>> {
        if page == 0 {
            return Err(SaavnError::Validation("page should be at least 1".into()));
        }
        if !(1..MAX_SEARCH_LIMIT).contains(&limit) {
            return Err(SaavnError::Validation(format!(
                "limit should be between 1 and {}",
                MAX_SEARCH_LIMIT - 1
            )));
        }
        let raw = self.get_json(&self.endpoints().search_song(query, page, limit))?;
        finish(raw, mode, |raw| Ok(parse_song_search(raw)))
    }

    /// Search albums.
    pub fn search_album(&self, query: &str, mode: ResponseMode) -> Result<Payload<AlbumSearch>> {
        let raw = self.get_json(&self.endpoints().search_album(query))?;
        finish(raw, mode, |raw| Ok(parse_album_search(raw)))
    }
}

fn parse_song_search(v: &Value) -> SongSearch {
    SongSearch {
        total: opt_u64(v, "total").unwrap_or(0),
        start: opt_u64(v, "start").unwrap_or(0),
        songs: v["results"]
            .as_array()
            .map(|arr| arr.iter().map(parse_song).collect())
            .unwrap_or_default(),
    }
}

fn parse_album_search(v: &Value) -> AlbumSearch {
    let Some(arr) = v["albums"]["data"].as_array() else {
        return AlbumSearch { albums: vec![] };
    };
    let albums = arr
        .iter()
        .map(|a| {
            let info = &a["more_info"];
            AlbumHit {
                id: text(a, "id"),
                title: text(a, "title"),
                artists: opt_text(a, "music"),
                image: hires_image(&text(a, "image")),
                url: text(a, "url"),
                description: opt_text(a, "description"),
                year: opt_text(info, "year"),
                language: opt_text(info, "language"),
                song_ids: info["song_pids"]
                    .as_str()
                    .map(|pids| {
                        pids.split(',')
                            .map(str::trim)
                            .filter(|p| !p.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        })
        .collect();
    AlbumSearch { albums }
}
