use clap::Parser;
use shelfwatch::config::ScrapeConfig;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "shelfwatch")]
#[command(about = "Scrapes a product search page and checks per-product stock")]
#[command(version)]
pub struct Args {
    /// JSON config file; the flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Search results URL to scrape
    #[arg(long)]
    pub search_url: Option<String>,

    /// Drop candidates priced above this
    #[arg(long)]
    pub max_price: Option<u32>,

    /// Path for the raw search-page HTML snapshot
    #[arg(long)]
    pub html_out: Option<String>,

    /// Path for the CSV export
    #[arg(long)]
    pub export: Option<String>,

    /// WebDriver server URL
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Run the browser with a visible window
    #[arg(long, default_value_t = false)]
    pub no_headless: bool,

    /// Seconds to let product pages settle in the browser
    #[arg(long)]
    pub settle: Option<u64>,

    /// Milliseconds to pause between candidates
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Build the run configuration from the config file (if any) and flags
pub fn build_config(args: &Args) -> Result<ScrapeConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ScrapeConfig::from_file(path)?,
        None => ScrapeConfig::default(),
    };

    if let Some(url) = &args.search_url {
        config.search_url = url.clone();
    }
    if let Some(max_price) = args.max_price {
        config.max_price = max_price;
    }
    if let Some(path) = &args.html_out {
        config.html_save_path = path.clone();
    }
    if let Some(path) = &args.export {
        config.export_path = path.clone();
    }
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    if args.no_headless {
        config.headless = false;
    }
    if let Some(settle) = args.settle {
        config.settle_secs = settle;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.per_item_delay_ms = delay_ms;
    }

    Ok(config)
}
