//! HTTP client for the JioSaavn web API.
//!
//! All API calls are plain GETs against `api.php`; the response is JSON.
//! Resource pages (`www.jiosaavn.com/song/...` etc.) are fetched as text only
//! to scrape an id out of them when the caller passes a URL.
//!
//! # Call flow
//!
//! 1. Check arguments (response mode, paging, `url`/`id` presence)
//! 2. If a URL was given: validate its shape, fetch the page, extract the id
//! 3. Build the request URL via [`Endpoints`] and fetch JSON
//! 4. Return [`Payload::Raw`] untouched, or normalize into [`Payload::Json`]
//!
//! Nothing is retried; every error is returned to the caller as-is.

use crate::config::Config;
use crate::endpoint::Endpoints;
use crate::error::{Result, SaavnError};
use crate::types::{Payload, ResponseMode};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Transport used by [`JioSaavnClient`].
///
/// [`HttpFetcher`] is the real implementation; tests substitute an
/// in-memory one.
pub trait Fetch {
    /// GET `url` and decode the body as JSON.
    fn fetch_json(&self, url: &str) -> Result<Value>;

    /// GET `url` with extra query parameters and return the body as text.
    fn fetch_text(&self, url: &str, params: &[(&str, &str)]) -> Result<String>;
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET json");
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    fn fetch_text(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        debug!(url, ?params, "GET text");
        let resp = self
            .http
            .get(url)
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(resp.text()?)
    }
}

/// Blocking client for the JioSaavn web API.
///
/// Holds a [`Fetch`] transport and the [`Endpoints`] built from the config.
/// API methods are implemented in separate modules (`search`, `song`,
/// `album`, `playlist`, `lyrics`) as `impl JioSaavnClient` blocks.
///
/// ```no_run
/// use jiosaavn_api::{JioSaavnClient, ResponseMode};
///
/// let client = JioSaavnClient::new().unwrap();
/// let found = client.search_song("alone", 1, 10, ResponseMode::Json).unwrap();
/// println!("{}", serde_json::to_string_pretty(&found).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct JioSaavnClient<F = HttpFetcher> {
    fetcher: F,
    endpoints: Endpoints,
}

impl JioSaavnClient<HttpFetcher> {
    /// Create a client using `~/.config/jiosaavn/config.json` (or defaults).
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::load()?)
    }

    /// Create a client from an explicit [`Config`].
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::with_fetcher(
            HttpFetcher::new(config)?,
            Endpoints::new(config.base_url.as_str()),
        ))
    }
}

impl<F: Fetch> JioSaavnClient<F> {
    /// Create a client over any transport.
    pub fn with_fetcher(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub(crate) fn get_json(&self, url: &str) -> Result<Value> {
        self.fetcher.fetch_json(url)
    }

    /// Resolve the resource id from a `url` or `id` argument.
    ///
    /// `url` wins when both are given. Empty strings count as absent.
    pub(crate) fn resolve_id(&self, target: Target<'_>) -> Result<String> {
        let url = target.url.filter(|s| !s.trim().is_empty());
        let id = target.id.filter(|s| !s.trim().is_empty());

        let Some(url) = url else {
            return id.map(str::to_owned).ok_or_else(|| {
                SaavnError::Validation(format!("please provide a url or id of {}", target.noun))
            });
        };

        if !(target.is_valid)(url) {
            return Err(SaavnError::InvalidUrl(format!(
                "please provide a valid jiosaavn {} url",
                target.kind
            )));
        }
        let page = self.fetcher.fetch_text(url, target.page_params)?;
        let id = (target.extract)(&page)?;
        debug!(url, id = id.as_str(), kind = target.kind, "resolved id from page");
        Ok(id)
    }
}

/// Arguments and resource-specific hooks for [`JioSaavnClient::resolve_id`].
pub(crate) struct Target<'a> {
    pub url: Option<&'a str>,
    pub id: Option<&'a str>,
    /// `song`, `album`, `playlist`
    pub kind: &'static str,
    /// Used in the missing-argument message, e.g. `a song`.
    pub noun: &'static str,
    pub is_valid: fn(&str) -> bool,
    pub extract: fn(&str) -> Result<String>,
    pub page_params: &'static [(&'static str, &'static str)],
}

/// Pass the backend JSON through untouched, or normalize it.
pub(crate) fn finish<T>(
    raw: Value,
    mode: ResponseMode,
    normalize: impl FnOnce(&Value) -> Result<T>,
) -> Result<Payload<T>> {
    match mode {
        ResponseMode::Raw => Ok(Payload::Raw(raw)),
        ResponseMode::Json => normalize(&raw).map(Payload::Json),
    }
}
