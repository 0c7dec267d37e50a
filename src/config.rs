use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Search results URL to scrape candidates from
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Where the raw search-page HTML snapshot is written
    #[serde(default = "default_html_save_path")]
    pub html_save_path: String,

    /// Where the CSV export is written
    #[serde(default = "default_export_path")]
    pub export_path: String,

    /// Candidates priced above this are dropped
    #[serde(default = "default_max_price")]
    pub max_price: u32,

    /// Run the browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Seconds to let scripts settle after navigating to a product page
    #[serde(default = "default_settle_secs")]
    pub settle_secs: u64,

    /// Seconds to let scripts settle on the search page (heavier page)
    #[serde(default = "default_search_settle_secs")]
    pub search_settle_secs: u64,

    /// Polite pause between candidates, in milliseconds
    #[serde(default = "default_per_item_delay_ms")]
    pub per_item_delay_ms: u64,

    /// Ordered phrases that mark a page out of stock; any match wins outright
    #[serde(default = "crate::availability::default_out_of_stock_phrases")]
    pub out_of_stock_phrases: Vec<String>,

    /// Ordered phrases on buttons/links that mark a page purchasable
    #[serde(default = "crate::availability::default_purchase_phrases")]
    pub purchase_phrases: Vec<String>,
}

impl ScrapeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            html_save_path: default_html_save_path(),
            export_path: default_export_path(),
            max_price: default_max_price(),
            headless: default_headless(),
            webdriver_url: default_webdriver_url(),
            settle_secs: default_settle_secs(),
            search_settle_secs: default_search_settle_secs(),
            per_item_delay_ms: default_per_item_delay_ms(),
            out_of_stock_phrases: crate::availability::default_out_of_stock_phrases(),
            purchase_phrases: crate::availability::default_purchase_phrases(),
        }
    }
}

/// Default search URL
fn default_search_url() -> String {
    "https://www.flipkart.com/search?q=Watches+for+Men+under+2000".to_string()
}

/// Default path for the raw HTML snapshot
fn default_html_save_path() -> String {
    "flipkart_watches_page.html".to_string()
}

/// Default path for the CSV export
fn default_export_path() -> String {
    "watches.csv".to_string()
}

/// Default price ceiling
fn default_max_price() -> u32 {
    2000
}

/// Browser runs headless by default
fn default_headless() -> bool {
    true
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default settle wait for product pages
fn default_settle_secs() -> u64 {
    3
}

/// Default settle wait for the search page
fn default_search_settle_secs() -> u64 {
    5
}

/// Default pause between candidates
fn default_per_item_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = ScrapeConfig::from_json("{}").unwrap();
        assert_eq!(config.max_price, 2000);
        assert!(config.headless);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.settle_secs, 3);
        assert_eq!(config.search_settle_secs, 5);
        assert_eq!(config.per_item_delay_ms, 1000);
        assert!(!config.out_of_stock_phrases.is_empty());
        assert!(!config.purchase_phrases.is_empty());
    }

    #[test]
    fn json_fields_override_defaults() {
        let config = ScrapeConfig::from_json(
            r#"{
                "search_url": "https://shop.example/search?q=watches",
                "max_price": 1500,
                "headless": false,
                "purchase_phrases": ["add to cart"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.search_url, "https://shop.example/search?q=watches");
        assert_eq!(config.max_price, 1500);
        assert!(!config.headless);
        assert_eq!(config.purchase_phrases, vec!["add to cart".to_string()]);
        // Untouched fields keep their defaults
        assert_eq!(config.export_path, "watches.csv");
    }
}
