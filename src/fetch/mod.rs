pub mod direct;
pub mod rendered;

pub use direct::DirectFetcher;
pub use rendered::BrowserSession;

/// A fetch tier: turns a URL into page markup, or signals it could not.
///
/// `None` covers every local failure (network error, timeout, non-200
/// status, lost session); the caller decides whether another tier runs.
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Option<String>;
}
