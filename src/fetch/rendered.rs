use crate::fetch::Fetch;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::error::Error;
use std::time::Duration;

/// The rendered fetch tier: one WebDriver session reused for the whole run.
///
/// Fetching navigates, sleeps a fixed settle duration so script-driven
/// content can populate, and returns the rendered DOM. The session must be
/// released with [`BrowserSession::close`] on every exit path; dropping it
/// silently leaks the browser process.
pub struct BrowserSession {
    client: Client,
    settle: Duration,
}

impl BrowserSession {
    /// Connect to a WebDriver server and open one browser session
    pub async fn connect(
        webdriver_url: &str,
        headless: bool,
        settle: Duration,
    ) -> Result<Self, Box<dyn Error>> {
        let client = connect_with_fallbacks(webdriver_url, headless).await?;
        Ok(Self { client, settle })
    }

    /// Navigate, wait the given settle duration, return the rendered markup
    pub async fn fetch_with_settle(&self, url: &str, settle: Duration) -> Option<String> {
        if let Err(e) = self.client.goto(url).await {
            ::log::warn!("Failed to navigate to {}: {}", url, e);
            return None;
        }

        // Fixed wait, not a readiness poll; the page gets the full duration
        tokio::time::sleep(settle).await;

        match self.client.source().await {
            Ok(source) => Some(source),
            Err(e) => {
                ::log::warn!("Failed to get rendered source for {}: {}", url, e);
                None
            }
        }
    }

    /// Tear down the browser session and its OS-level child process
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}

impl Fetch for BrowserSession {
    async fn fetch(&self, url: &str) -> Option<String> {
        self.fetch_with_settle(url, self.settle).await
    }
}

/// Chrome capabilities for the session; headless uses the new-style flag
fn chrome_capabilities(headless: bool) -> serde_json::Map<String, serde_json::Value> {
    let mut args = vec!["--no-sandbox", "--disable-dev-shm-usage", "--disable-gpu"];
    if headless {
        args.push("--headless=new");
    }

    let mut caps = serde_json::Map::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

/// Connects to the configured WebDriver URL, then to common alternatives
async fn connect_with_fallbacks(
    webdriver_url: &str,
    headless: bool,
) -> Result<Client, Box<dyn Error>> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(chrome_capabilities(headless));

    match builder.connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    Err(format!(
        "could not connect to a WebDriver server at {} or any fallback; \
         is chromedriver running?",
        webdriver_url
    )
    .into())
}
