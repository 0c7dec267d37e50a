use crate::results::ProductCandidate;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

// Selectors discovered in a saved copy of the live search page; these are
// site-specific and will need re-deriving whenever the storefront reskins
const CONTAINER_SELECTOR: &str = "div._75nlfW";
const TITLE_SELECTOR: &str = "a.WKTcLC";
const BRAND_SELECTOR: &str = "div.KzDlHZ";
const PRICE_SELECTOR: &str = "div.Nx9bqj";

/// Extracts product candidates from the search results markup.
///
/// Candidates keep DOM order. A candidate is dropped when its price is
/// missing, unparseable, or above `max_price`; no deduplication is done.
pub fn parse_search_page(html: &str, base_url: &Url, max_price: u32) -> Vec<ProductCandidate> {
    let doc = Html::parse_document(html);

    let container = Selector::parse(CONTAINER_SELECTOR).unwrap();
    let title = Selector::parse(TITLE_SELECTOR).unwrap();
    let brand = Selector::parse(BRAND_SELECTOR).unwrap();
    let price = Selector::parse(PRICE_SELECTOR).unwrap();

    let mut candidates = Vec::new();
    for card in doc.select(&container) {
        let title_el = card.select(&title).next();

        let name = title_el
            .map(|el| collapse_text(el.text()))
            .unwrap_or_default();

        // Fall back to the title's first token when the card has no
        // dedicated brand element
        let brand = card
            .select(&brand)
            .next()
            .map(|el| collapse_text(el.text()))
            .unwrap_or_else(|| {
                name.split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        let price = card
            .select(&price)
            .next()
            .and_then(|el| parse_price_text(&collapse_text(el.text())));

        let link = title_el
            .and_then(|el| el.value().attr("href"))
            .and_then(|href| base_url.join(href).ok())
            .map(|resolved| resolved.to_string())
            .unwrap_or_default();

        let Some(price) = price else {
            ::log::debug!("Dropping card without a usable price: {:?}", name);
            continue;
        };
        if price > max_price {
            ::log::debug!("Dropping {:?} priced {} above ceiling {}", name, price, max_price);
            continue;
        }

        candidates.push(ProductCandidate {
            name,
            brand,
            price,
            link,
        });
    }

    ::log::info!("Parsed {} candidates under price {}", candidates.len(), max_price);
    candidates
}

/// Strips everything but digits and parses the remainder as an integer
/// price. `"₹1,299"` becomes `1299`; text with no digits yields `None`.
pub fn parse_price_text(text: &str) -> Option<u32> {
    let non_digits = Regex::new(r"[^0-9]").unwrap();
    let digits = non_digits.replace_all(text, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Join an element's text nodes and collapse runs of whitespace
fn collapse_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
