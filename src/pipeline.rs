use crate::availability::Classifier;
use crate::config::ScrapeConfig;
use crate::export;
use crate::fetch::{BrowserSession, DirectFetcher};
use crate::parsers;
use crate::resolver;
use crate::results::ResultRow;
use std::error::Error;
use std::fs;
use std::time::Duration;
use url::Url;

/// Runs the whole scrape: search page -> candidates -> per-product
/// availability -> CSV export.
///
/// The browser session is acquired once here and closed on every exit
/// path, including when the run body errors out.
pub async fn run(config: &ScrapeConfig) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let browser = BrowserSession::connect(
        &config.webdriver_url,
        config.headless,
        Duration::from_secs(config.settle_secs),
    )
    .await?;

    let result = run_with_browser(config, &browser).await;
    browser.close().await;
    result
}

async fn run_with_browser(
    config: &ScrapeConfig,
    browser: &BrowserSession,
) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let base_url = Url::parse(&config.search_url)?;

    println!("[*] Loading search page (WebDriver)...");
    let search_html = browser
        .fetch_with_settle(
            &config.search_url,
            Duration::from_secs(config.search_settle_secs),
        )
        .await
        .ok_or("failed to load the search page through the browser")?;

    fs::write(&config.html_save_path, &search_html)?;
    println!("[+] Saved search HTML to {}", config.html_save_path);

    let candidates = parsers::parse_search_page(&search_html, &base_url, config.max_price);
    println!(
        "[*] Found {} products (filtered by price <= {})",
        candidates.len(),
        config.max_price
    );

    let direct = DirectFetcher::new()?;
    let classifier = Classifier::new(
        config.out_of_stock_phrases.clone(),
        config.purchase_phrases.clone(),
    );

    let total = candidates.len();
    let mut rows = Vec::with_capacity(total);
    for (idx, candidate) in candidates.into_iter().enumerate() {
        println!(
            "Checking ({}/{}): {} | {}",
            idx + 1,
            total,
            candidate.name,
            candidate.price
        );

        let availability =
            resolver::resolve(&direct, Some(browser), &classifier, &candidate.link).await;
        println!(" -> availability: {}", availability);

        rows.push(ResultRow::from_candidate(candidate, availability));

        // Polite pause so the storefront is not hammered
        tokio::time::sleep(Duration::from_millis(config.per_item_delay_ms)).await;
    }

    export::write_rows(&config.export_path, &rows)?;
    println!("[+] Saved {} items to {}", rows.len(), config.export_path);

    Ok(rows)
}
