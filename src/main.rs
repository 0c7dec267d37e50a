use clap::Parser;
use shelfwatch::Scrape;

mod args;
use args::{Args, build_config};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return;
        }
    };

    println!("Note: scraping requires a WebDriver server (e.g. chromedriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using the default {}",
        config.webdriver_url
    );

    ::log::info!("Starting scrape of {}", config.search_url);
    let start_time = std::time::Instant::now();

    match Scrape::new().with_config(config).run().await {
        Ok(rows) => {
            ::log::info!(
                "Scrape complete - {} rows exported in {:.2} seconds",
                rows.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
        }
    }
}
