use crate::fetch::Fetch;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// The fast fetch tier: a plain HTTP GET with browser-like headers.
///
/// Only a 200 response counts as usable markup; anything else is reported
/// as a miss so the caller can fall back to the rendered tier.
pub struct DirectFetcher {
    client: reqwest::Client,
}

impl DirectFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for DirectFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                ::log::debug!("Direct fetch of {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            ::log::debug!("Direct fetch of {} returned {}", url, response.status());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                ::log::debug!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}
