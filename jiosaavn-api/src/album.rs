//! Album API.
//!
//! Endpoint: `GET api.php?__call=content.getAlbumDetails&albumid={id}`
//!
//! Response:
//! ```json
//! {
//!   "title": "Aashiqui 2", "name": "Aashiqui 2", "year": "2013",
//!   "release_date": "2013-04-05",
//!   "primary_artists": "Mithoon, Ankit Tiwari, Jeet Gannguli",
//!   "primary_artists_id": "...",
//!   "albumid": "1139549",
//!   "perma_url": "https://www.jiosaavn.com/album/aashiqui-2/Yw-u0H0CxMQ_",
//!   "image": "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg",
//!   "songs": [ { ...flat song object... } ]
//! }
//! ```

use crate::client::{Fetch, JioSaavnClient, Target, finish};
use crate::error::Result;
use crate::extract::get_album_id;
use crate::fields::{hires_image, opt_text, text};
use crate::song::parse_song;
use crate::types::{Album, Payload, ResponseMode};
use crate::validate::is_album_url;
use serde_json::Value;

impl<F: Fetch> JioSaavnClient<F> {
    /// Get album metadata and its songs from an album page `url` or an
    /// album `id`. With `lyrics` set, lyrics are merged into each song.
    pub fn album(
        &self,
        url: Option<&str>,
        id: Option<&str>,
        lyrics: bool,
        mode: ResponseMode,
    ) -> Result<Payload<Album>> {
        let id = self.resolve_id(Target {
            url,
            id,
            kind: "album",
            noun: "an album",
            is_valid: is_album_url,
            extract: get_album_id,
            page_params: &[],
        })?;
        let raw = self.get_json(&self.endpoints().album(&id))?;
        finish(raw, mode, |raw| {
            let mut album = parse_album(raw);
            if lyrics {
                self.attach_lyrics(&mut album.songs)?;
            }
            Ok(album)
        })
    }
}

fn parse_album(v: &Value) -> Album {
    let songs: Vec<_> = v["songs"]
        .as_array()
        .map(|arr| arr.iter().map(parse_song).collect())
        .unwrap_or_default();
    let title = opt_text(v, "title").unwrap_or_else(|| text(v, "name"));
    Album {
        id: text(v, "albumid"),
        title,
        year: text(v, "year"),
        release_date: opt_text(v, "release_date"),
        primary_artists: text(v, "primary_artists"),
        primary_artists_id: opt_text(v, "primary_artists_id"),
        image: hires_image(&text(v, "image")),
        perma_url: text(v, "perma_url"),
        song_count: songs.len() as u64,
        songs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaavnError;
    use crate::song::tests::raw_song;
    use crate::testing::{MockFetch, endpoints};
    use serde_json::json;

    fn raw_album() -> Value {
        json!({
            "title": "Aashiqui 2",
            "name": "Aashiqui 2",
            "year": "2013",
            "release_date": "2013-04-05",
            "primary_artists": "Mithoon, Ankit Tiwari",
            "primary_artists_id": "459320, 456269",
            "albumid": "1139549",
            "perma_url": "https://www.jiosaavn.com/album/aashiqui-2/Yw-u0H0CxMQ_",
            "image": "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg",
            "songs": [raw_song("s1", true), raw_song("s2", false)]
        })
    }

    #[test]
    fn album_by_id() {
        let ep = endpoints();
        let client = MockFetch::default()
            .with_json(ep.album("1139549"), raw_album())
            .client();
        let album = client
            .album(None, Some("1139549"), false, ResponseMode::Json)
            .unwrap()
            .into_json()
            .unwrap();
        assert_eq!(album.id, "1139549");
        assert_eq!(album.title, "Aashiqui 2");
        assert_eq!(album.song_count, 2);
        assert_eq!(album.songs[1].id, "s2");
        assert!(album.image.ends_with("500x500.jpg"));
        assert!(album.songs.iter().all(|s| s.lyrics.is_none()));
    }

    #[test]
    fn album_lyrics_only_for_songs_that_have_them() {
        let ep = endpoints();
        let client = MockFetch::default()
            .with_json(ep.album("1139549"), raw_album())
            .with_json(ep.lyrics("s1"), json!({"lyrics": "la la"}))
            .client();
        let album = client
            .album(None, Some("1139549"), true, ResponseMode::Json)
            .unwrap()
            .into_json()
            .unwrap();
        assert_eq!(album.songs[0].lyrics.as_deref(), Some("la la"));
        assert_eq!(album.songs[1].lyrics, None);
        assert_eq!(
            client.fetcher().calls(),
            vec![ep.album("1139549"), ep.lyrics("s1")]
        );
    }

    #[test]
    fn album_by_url() {
        let ep = endpoints();
        let url = "https://www.jiosaavn.com/album/aashiqui-2/Yw-u0H0CxMQ_";
        let client = MockFetch::default()
            .with_text(url, r#"<script>["page_id","1139549"]</script>"#)
            .with_json(ep.album("1139549"), raw_album())
            .client();
        let raw = client
            .album(Some(url), None, true, ResponseMode::Raw)
            .unwrap()
            .into_raw()
            .unwrap();
        assert_eq!(raw, raw_album());
        // raw mode never fetches lyrics
        assert_eq!(client.fetcher().calls().len(), 2);
    }

    #[test]
    fn invalid_album_url() {
        let client = MockFetch::default().client();
        let err = client
            .album(
                Some("https://example.com/not-an-album"),
                None,
                false,
                ResponseMode::Json,
            )
            .unwrap_err();
        assert!(matches!(err, SaavnError::InvalidUrl(_)));
    }

    #[test]
    fn album_needs_url_or_id() {
        let client = MockFetch::default().client();
        let err = client
            .album(None, None, false, ResponseMode::Json)
            .unwrap_err();
        assert!(matches!(err, SaavnError::Validation(ref m) if m.contains("an album")));
    }

    #[test]
    fn page_without_id() {
        let url = "https://www.jiosaavn.com/album/aashiqui-2/Yw-u0H0CxMQ_";
        let client = MockFetch::default()
            .with_text(url, "<html>redesigned</html>")
            .client();
        let err = client
            .album(Some(url), None, false, ResponseMode::Json)
            .unwrap_err();
        assert!(matches!(err, SaavnError::Extraction(_)));
    }
}
