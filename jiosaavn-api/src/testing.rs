//! In-memory [`Fetch`] for unit tests, keyed by full request URL.

use crate::client::{Fetch, JioSaavnClient};
use crate::endpoint::Endpoints;
use crate::error::{Result, SaavnError};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE: &str = "http://saavn.test/api.php";

#[derive(Debug, Default, Clone)]
pub struct MockFetch {
    json: HashMap<String, Value>,
    text: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl MockFetch {
    pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
        self.json.insert(url.into(), body);
        self
    }

    pub fn with_text(mut self, url: impl Into<String>, body: &str) -> Self {
        self.text.insert(url.into(), body.to_owned());
        self
    }

    /// Every URL requested so far, text fetches with their query appended.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn client(self) -> JioSaavnClient<Self> {
        JioSaavnClient::with_fetcher(self, endpoints())
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(BASE)
}

impl Fetch for MockFetch {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        self.calls.borrow_mut().push(url.to_owned());
        self.json
            .get(url)
            .cloned()
            .ok_or_else(|| SaavnError::Other(format!("unexpected json request: {url}")))
    }

    fn fetch_text(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let full = if query.is_empty() {
            url.to_owned()
        } else {
            format!("{url}?{}", query.join("&"))
        };
        self.calls.borrow_mut().push(full);
        self.text
            .get(url)
            .cloned()
            .ok_or_else(|| SaavnError::Other(format!("unexpected page request: {url}")))
    }
}
