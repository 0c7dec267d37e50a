use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock state of a product page. There is no "unknown" variant;
/// anything the classifier cannot prove in stock is out of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// A purchase action was found and no out-of-stock phrase was present
    #[serde(rename = "in stock")]
    InStock,

    /// An out-of-stock phrase was found, or nothing decisive was
    #[serde(rename = "out of stock")]
    OutOfStock,
}

impl Availability {
    /// The exact lowercase label used in console output and the export file
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in stock",
            Availability::OutOfStock => "out of stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product extracted from the search results page, before its
/// availability has been resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCandidate {
    /// Product title as shown on the search card
    pub name: String,

    /// Brand, or the first token of the title when no brand element exists
    pub brand: String,

    /// Integer price with all currency formatting stripped
    pub price: u32,

    /// Absolute URL of the product detail page
    pub link: String,
}

/// One row of the final export, in search-result discovery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub name: String,
    pub brand: String,
    pub price: u32,
    pub availability: Availability,
    pub link: String,
}

impl ResultRow {
    /// Fold a candidate and its resolved availability into an export row
    pub fn from_candidate(candidate: ProductCandidate, availability: Availability) -> Self {
        Self {
            name: candidate.name,
            brand: candidate.brand,
            price: candidate.price,
            availability,
            link: candidate.link,
        }
    }
}
