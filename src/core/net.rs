// src/core/net.rs
//
// The only place that touches the network. One blocking GET, no retry.
// Anything that wants retries or canned pages implements `Fetch`.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::CollectError;

pub trait Fetch {
    /// Return the body of `url` as text.
    fn get(&mut self, url: &Url) -> Result<String, CollectError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CollectError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CollectError::fetch("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&mut self, url: &Url) -> Result<String, CollectError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| CollectError::fetch(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CollectError::fetch(url, format!("HTTP {status}")));
        }
        resp.text().map_err(|e| CollectError::fetch(url, e))
    }
}
