#![allow(async_fn_in_trait)]

// Re-export modules
pub mod availability;
pub mod config;
pub mod export;
pub mod fetch;
pub mod parsers;
pub mod pipeline;
pub mod resolver;
pub mod results;

// Re-export commonly used types for convenience
pub use results::{Availability, ProductCandidate, ResultRow};

use config::ScrapeConfig;
use std::error::Error;
use std::path::Path;

/// Builder for configuring and running one scrape
pub struct Scrape {
    config: ScrapeConfig,
}

impl Scrape {
    /// Create a new Scrape builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrapeConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        self.config = ScrapeConfig::from_file(path)?;
        Ok(self)
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, Box<dyn Error>> {
        self.config = ScrapeConfig::from_json(json)?;
        Ok(self)
    }

    /// Set the search results URL
    pub fn with_search_url(mut self, url: &str) -> Self {
        self.config.search_url = url.to_string();
        self
    }

    /// Set the price ceiling
    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.config.max_price = max_price;
        self
    }

    /// Toggle headless browsing
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Set the CSV export path
    pub fn with_export_path(mut self, path: &str) -> Self {
        self.config.export_path = path.to_string();
        self
    }

    /// Run the scrape and return the export rows in discovery order
    pub async fn run(self) -> Result<Vec<ResultRow>, Box<dyn Error>> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        pipeline::run(&config).await
    }
}

impl Default for Scrape {
    fn default() -> Self {
        Self::new()
    }
}
