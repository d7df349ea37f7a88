//! Lyrics API.
//!
//! Endpoint: `GET api.php?__call=lyrics.getLyrics&lyrics_id={song id}`
//!
//! Response when lyrics exist:
//! ```json
//! {
//!   "lyrics": "Hum tere bin ab reh nahi sakte<br>Tere bina kya wajood mera<br>...",
//!   "script_tracking_url": "https://...",
//!   "lyrics_copyright": "Writer(s): Mithoon",
//!   "snippet": "Tere bina kya wajood mera"
//! }
//! ```
//!
//! Response when they don't:
//! ```json
//! { "status": "failure", "error": { "code": "LYRICS_NOT_FOUND", "msg": "..." } }
//! ```
//!
//! The failure case is not an error here; it normalizes to
//! `{"status": "no lyric"}`.

use crate::client::{Fetch, JioSaavnClient, finish};
use crate::error::Result;
use crate::fields::opt_text;
use crate::song::song_target;
use crate::types::{Lyrics, LyricsResult, Payload, ResponseMode};
use serde_json::Value;

impl<F: Fetch> JioSaavnClient<F> {
    /// Get the lyrics of a song from a song page `url` or a song `id`.
    pub fn lyrics(
        &self,
        url: Option<&str>,
        id: Option<&str>,
        mode: ResponseMode,
    ) -> Result<Payload<LyricsResult>> {
        let id = self.resolve_id(song_target(url, id))?;
        let raw = self.get_json(&self.endpoints().lyrics(&id))?;
        finish(raw, mode, |raw| Ok(parse_lyrics(raw)))
    }

    /// Normalized lyrics lookup used when merging lyrics into songs.
    pub(crate) fn lyrics_by_id(&self, id: &str) -> Result<LyricsResult> {
        let raw = self.get_json(&self.endpoints().lyrics(id))?;
        Ok(parse_lyrics(&raw))
    }
}

fn parse_lyrics(v: &Value) -> LyricsResult {
    if v["status"].as_str() == Some("failure") {
        return LyricsResult::not_found();
    }
    LyricsResult::Found(Lyrics {
        lyrics: opt_text(v, "lyrics").map(|l| l.replace("<br>", "\n")),
        lyrics_copyright: opt_text(v, "lyrics_copyright"),
        snippet: opt_text(v, "snippet"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaavnError;
    use crate::testing::{MockFetch, endpoints};
    use serde_json::json;

    fn failure() -> Value {
        json!({
            "status": "failure",
            "error": {"code": "LYRICS_NOT_FOUND", "msg": "Lyrics not found"}
        })
    }

    #[test]
    fn missing_lyrics_is_a_normal_result() {
        let ep = endpoints();
        let client = MockFetch::default()
            .with_json(ep.lyrics("noLyric"), failure())
            .client();
        let out = client
            .lyrics(None, Some("noLyric"), ResponseMode::Json)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({"status": "no lyric"})
        );
    }

    #[test]
    fn raw_failure_is_passed_through() {
        let ep = endpoints();
        let client = MockFetch::default()
            .with_json(ep.lyrics("noLyric"), failure())
            .client();
        let out = client
            .lyrics(None, Some("noLyric"), ResponseMode::Raw)
            .unwrap();
        assert_eq!(out.into_raw().unwrap(), failure());
    }

    #[test]
    fn found_lyrics() {
        let ep = endpoints();
        let client = MockFetch::default()
            .with_json(
                ep.lyrics("blMuXL1P"),
                json!({
                    "lyrics": "line one<br>line two",
                    "script_tracking_url": "https://tracking.example/x",
                    "lyrics_copyright": "Writer(s): Someone",
                    "snippet": "line two"
                }),
            )
            .client();
        let out = client
            .lyrics(None, Some("blMuXL1P"), ResponseMode::Json)
            .unwrap()
            .into_json()
            .unwrap();
        assert_eq!(out.text(), Some("line one\nline two"));
        assert_eq!(
            out,
            LyricsResult::Found(Lyrics {
                lyrics: Some("line one\nline two".into()),
                lyrics_copyright: Some("Writer(s): Someone".into()),
                snippet: Some("line two".into()),
            })
        );
    }

    #[test]
    fn needs_url_or_id() {
        let client = MockFetch::default().client();
        let err = client.lyrics(None, None, ResponseMode::Json).unwrap_err();
        assert!(matches!(err, SaavnError::Validation(_)));
    }

    #[test]
    fn album_url_is_not_a_song_url() {
        let client = MockFetch::default().client();
        let err = client
            .lyrics(
                Some("https://www.jiosaavn.com/album/aashiqui-2/Yw-u0H0CxMQ_"),
                None,
                ResponseMode::Json,
            )
            .unwrap_err();
        assert!(matches!(err, SaavnError::InvalidUrl(_)));
    }
}
