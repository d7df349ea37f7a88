//! Shape checks for public JioSaavn page URLs.
//!
//! Only the host and the leading path markers are checked; anything after a
//! valid path (trailing slash, query string, fragment) is accepted.

use regex::Regex;
use std::sync::LazyLock;

static SONG_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?jiosaavn\.com/song/[^/?#]+/[^/?#]+").expect("valid regex")
});

static ALBUM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?jiosaavn\.com/album/[^/?#]+/[^/?#]+").expect("valid regex")
});

static PLAYLIST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?jiosaavn\.com/(?:featured|s/playlist)/[^?#]+")
        .expect("valid regex")
});

/// `https://www.jiosaavn.com/song/<slug>/<token>`
pub fn is_song_url(url: &str) -> bool {
    SONG_URL.is_match(url.trim())
}

/// `https://www.jiosaavn.com/album/<slug>/<token>`
pub fn is_album_url(url: &str) -> bool {
    ALBUM_URL.is_match(url.trim())
}

/// `https://www.jiosaavn.com/featured/<slug>/<token>` or
/// `https://www.jiosaavn.com/s/playlist/<hash>/<slug>/<token>`
pub fn is_playlist_url(url: &str) -> bool {
    PLAYLIST_URL.is_match(url.trim())
}
