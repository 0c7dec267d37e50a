use crate::results::Availability;
use scraper::{Html, Selector};

/// Keyword classifier that decides whether a product page is purchasable.
///
/// Explicit negative phrases are rarer and more reliable than positive ones
/// (a "Buy Now" button can be present but disabled in ways plain markup
/// inspection cannot detect), so any out-of-stock phrase match wins outright
/// before purchase actions are even considered.
#[derive(Debug, Clone)]
pub struct Classifier {
    out_of_stock_phrases: Vec<String>,
    purchase_phrases: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_out_of_stock_phrases(), default_purchase_phrases())
    }
}

impl Classifier {
    /// Create a classifier with explicit phrase lists, both matched in order
    pub fn new(out_of_stock_phrases: Vec<String>, purchase_phrases: Vec<String>) -> Self {
        Self {
            out_of_stock_phrases: out_of_stock_phrases
                .into_iter()
                .map(|p| p.to_lowercase())
                .collect(),
            purchase_phrases: purchase_phrases
                .into_iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// Classify a parsed product page.
    ///
    /// Priority:
    ///   1. any out-of-stock phrase anywhere in the page text -> out of stock
    ///   2. a purchase phrase on a button, then an anchor, then any span/div
    ///      -> in stock
    ///   3. nothing decisive -> out of stock
    pub fn classify(&self, doc: &Html) -> Availability {
        let page_text = normalize_text(doc.root_element().text());

        for phrase in &self.out_of_stock_phrases {
            if page_text.contains(phrase.as_str()) {
                ::log::debug!("Out-of-stock phrase matched: {:?}", phrase);
                return Availability::OutOfStock;
            }
        }

        // Buttons are the strongest positive signal, then action links,
        // then generic text containers some storefronts style as buttons
        for group in ["button", "a", "span, div"] {
            let selector = Selector::parse(group).unwrap();
            for element in doc.select(&selector) {
                let text = normalize_text(element.text());
                for phrase in &self.purchase_phrases {
                    if text.contains(phrase.as_str()) {
                        ::log::debug!("Purchase phrase {:?} matched on <{}>", phrase, group);
                        return Availability::InStock;
                    }
                }
            }
        }

        Availability::OutOfStock
    }

    /// Parse raw markup and classify it
    pub fn classify_html(&self, html: &str) -> Availability {
        self.classify(&Html::parse_document(html))
    }
}

/// Join text nodes, collapse whitespace and lowercase the result
fn normalize_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Default out-of-stock phrase list, strongest indicators first
pub fn default_out_of_stock_phrases() -> Vec<String> {
    [
        "out of stock",
        "sold out",
        "notify me",
        "notify for",
        "currently unavailable",
        "temporarily out of stock",
        "coming soon",
        "unavailable",
        "notify when available",
        "out of inventory",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Default purchase-action phrase list
pub fn default_purchase_phrases() -> Vec<String> {
    [
        "add to cart",
        "buy now",
        "add to bag",
        "add to basket",
        "add to trolley",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(html: &str) -> Availability {
        Classifier::default().classify_html(html)
    }

    #[test]
    fn buy_button_alone_is_in_stock() {
        let html = r#"<html><body>
            <h1>Classic Analog Watch</h1>
            <button class="action">BUY NOW</button>
        </body></html>"#;
        assert_eq!(classify(html), Availability::InStock);
    }

    #[test]
    fn out_of_stock_phrase_dominates_buy_button() {
        let html = r#"<html><body>
            <div class="banner">Sold Out</div>
            <button class="action">Buy Now</button>
        </body></html>"#;
        assert_eq!(classify(html), Availability::OutOfStock);
    }

    #[test]
    fn no_signal_defaults_to_out_of_stock() {
        let html = "<html><body><p>A lovely watch with a leather strap.</p></body></html>";
        assert_eq!(classify(html), Availability::OutOfStock);
    }

    #[test]
    fn negative_phrase_spanning_text_nodes_is_detected() {
        // "out" and "of stock" split across inline elements still read as
        // one phrase once whitespace is collapsed
        let html = "<html><body><span>Out</span> <span>of stock</span></body></html>";
        assert_eq!(classify(html), Availability::OutOfStock);
    }

    #[test]
    fn action_anchor_counts_as_in_stock() {
        let html = r#"<html><body>
            <a href="/cart/add?id=1">Add to Cart</a>
        </body></html>"#;
        assert_eq!(classify(html), Availability::InStock);
    }

    #[test]
    fn action_phrase_in_div_counts_as_in_stock() {
        let html = r#"<html><body>
            <div class="cta">add to trolley</div>
        </body></html>"#;
        assert_eq!(classify(html), Availability::InStock);
    }

    #[test]
    fn notify_me_is_out_of_stock() {
        let html = r#"<html><body>
            <button>Notify Me</button>
        </body></html>"#;
        assert_eq!(classify(html), Availability::OutOfStock);
    }

    #[test]
    fn classifier_is_deterministic() {
        let html = r#"<html><body><button>Add to Bag</button></body></html>"#;
        let classifier = Classifier::default();
        let first = classifier.classify_html(html);
        for _ in 0..5 {
            assert_eq!(classifier.classify_html(html), first);
        }
        assert_eq!(first, Availability::InStock);
    }

    #[test]
    fn custom_phrase_lists_are_honored() {
        let classifier = Classifier::new(
            vec!["agotado".to_string()],
            vec!["comprar ahora".to_string()],
        );
        let sold_out = "<html><body><div>Agotado</div><button>Comprar ahora</button></body></html>";
        assert_eq!(classifier.classify_html(sold_out), Availability::OutOfStock);
        let purchasable = "<html><body><button>Comprar ahora</button></body></html>";
        assert_eq!(classifier.classify_html(purchasable), Availability::InStock);
    }
}
