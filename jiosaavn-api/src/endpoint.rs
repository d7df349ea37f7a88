//! Request URL builder.
//!
//! Every call goes to the single `api.php` endpoint; the operation is picked
//! by the `__call` query parameter. The parameter sets below are what the
//! web player sends and are kept verbatim, including the odd
//! `_marker=0%3F_marker%3D0` value.
//!
//! | Method                       | `__call`                  | id parameter |
//! |------------------------------|---------------------------|--------------|
//! | [`Endpoints::search_song`]   | `search.getResults`       | —            |
//! | [`Endpoints::search_album`]  | `autocomplete.get`        | —            |
//! | [`Endpoints::song`]          | `song.getDetails`         | `pids`       |
//! | [`Endpoints::album`]         | `content.getAlbumDetails` | `albumid`    |
//! | [`Endpoints::playlist`]      | `playlist.getDetails`     | `listid`     |
//! | [`Endpoints::lyrics`]        | `lyrics.getLyrics`        | `lyrics_id`  |

use crate::config::DEFAULT_BASE_URL;
use urlencoding::encode;

/// Builds fully-formed request URLs against a base `api.php` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The base URL the query strings are appended to.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn search_song(&self, query: &str, page: u32, limit: u32) -> String {
        format!(
            "{}?p={page}&q={}&_format=json&_marker=0&ctx=wap6dot0&n={limit}&__call=search.getResults",
            self.base,
            encode(query),
        )
    }

    pub fn search_album(&self, query: &str) -> String {
        format!(
            "{}?__call=autocomplete.get&_format=json&_marker=0&cc=in&includeMetaTags=1&query={}",
            self.base,
            encode(query),
        )
    }

    pub fn song(&self, id: &str) -> String {
        format!(
            "{}?__call=song.getDetails&cc=in&_marker=0%3F_marker%3D0&_format=json&pids={}",
            self.base,
            encode(id),
        )
    }

    pub fn album(&self, id: &str) -> String {
        format!(
            "{}?__call=content.getAlbumDetails&_format=json&cc=in&_marker=0%3F_marker%3D0&albumid={}",
            self.base,
            encode(id),
        )
    }

    pub fn playlist(&self, id: &str) -> String {
        format!(
            "{}?__call=playlist.getDetails&_format=json&cc=in&_marker=0%3F_marker%3D0&listid={}",
            self.base,
            encode(id),
        )
    }

    pub fn lyrics(&self, id: &str) -> String {
        format!(
            "{}?__call=lyrics.getLyrics&ctx=web6dot0&api_version=4&_format=json&_marker=0%3F_marker%3D0&lyrics_id={}",
            self.base,
            encode(id),
        )
    }
}
