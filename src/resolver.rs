use crate::availability::Classifier;
use crate::fetch::Fetch;
use crate::results::Availability;

/// Resolves one product's availability with a fixed-order fetch chain.
///
/// The primary (direct HTTP) tier runs first purely for speed; the
/// classifier is total, so any markup it produces is final and the
/// fallback tier only ever fires when the primary fetch itself fails.
/// Some storefronts only reveal stock state after scripts run, which is
/// what the rendered fallback is for. With no markup from either tier the
/// conservative default applies.
pub async fn resolve<P: Fetch, F: Fetch>(
    primary: &P,
    fallback: Option<&F>,
    classifier: &Classifier,
    url: &str,
) -> Availability {
    if let Some(html) = primary.fetch(url).await {
        return classifier.classify_html(&html);
    }

    if let Some(fallback) = fallback {
        ::log::debug!("Primary fetch missed, rendering {} in the browser", url);
        if let Some(html) = fallback.fetch(url).await {
            return classifier.classify_html(&html);
        }
        return Availability::OutOfStock;
    }

    ::log::debug!("No fallback tier available for {}", url);
    Availability::OutOfStock
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stub tier that always returns the same markup (or nothing) and
    /// counts how often it was asked
    struct FixedPage {
        markup: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl FixedPage {
        fn some(markup: &'static str) -> Self {
            Self {
                markup: Some(markup),
                calls: Cell::new(0),
            }
        }

        fn none() -> Self {
            Self {
                markup: None,
                calls: Cell::new(0),
            }
        }
    }

    impl Fetch for FixedPage {
        async fn fetch(&self, _url: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            self.markup.map(String::from)
        }
    }

    const BUY_PAGE: &str = "<html><body><button>Buy Now</button></body></html>";
    const SOLD_OUT_PAGE: &str = "<html><body><div>Sold out</div></body></html>";

    #[tokio::test]
    async fn successful_primary_fetch_skips_the_fallback() {
        let primary = FixedPage::some(BUY_PAGE);
        let fallback = FixedPage::some(SOLD_OUT_PAGE);
        let classifier = Classifier::default();

        let result = resolve(&primary, Some(&fallback), &classifier, "https://x/p").await;
        assert_eq!(result, Availability::InStock);
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(fallback.calls.get(), 0);
    }

    #[tokio::test]
    async fn failed_primary_falls_back_to_rendered_tier() {
        let primary = FixedPage::none();
        let fallback = FixedPage::some(BUY_PAGE);
        let classifier = Classifier::default();

        let result = resolve(&primary, Some(&fallback), &classifier, "https://x/p").await;
        assert_eq!(result, Availability::InStock);
        assert_eq!(fallback.calls.get(), 1);
    }

    #[tokio::test]
    async fn both_tiers_failing_defaults_to_out_of_stock() {
        let primary = FixedPage::none();
        let fallback = FixedPage::none();
        let classifier = Classifier::default();

        let result = resolve(&primary, Some(&fallback), &classifier, "https://x/p").await;
        assert_eq!(result, Availability::OutOfStock);
    }

    #[tokio::test]
    async fn no_fallback_tier_defaults_to_out_of_stock() {
        let primary = FixedPage::none();
        let classifier = Classifier::default();

        let result =
            resolve(&primary, None::<&FixedPage>, &classifier, "https://x/p").await;
        assert_eq!(result, Availability::OutOfStock);
    }

    #[tokio::test]
    async fn primary_markup_is_classified_even_when_negative() {
        // A decisive "out of stock" from the fast tier is final; the
        // browser never re-checks it
        let primary = FixedPage::some(SOLD_OUT_PAGE);
        let fallback = FixedPage::some(BUY_PAGE);
        let classifier = Classifier::default();

        let result = resolve(&primary, Some(&fallback), &classifier, "https://x/p").await;
        assert_eq!(result, Availability::OutOfStock);
        assert_eq!(fallback.calls.get(), 0);
    }
}
