//! Configuration options for fetching and extraction.
//!
//! The `Options` struct carries everything a [`Session`](crate::Session) needs
//! to talk to the proxy and label its output.

use std::time::Duration;

use crate::patterns;

/// Configuration options for a scraping session.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use glovo_scrape::Options;
///
/// let options = Options {
///     request_timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// assert_eq!(options.default_category, "Uncategorized");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Proxy endpoint. The target URL is passed as its `url` query parameter.
    ///
    /// Default: `https://glovo-proxy.onrender.com/fetch`
    pub proxy_base: String,

    /// Upper bound for a single proxy request, connect to last body byte.
    ///
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// `User-Agent` header sent to the proxy.
    ///
    /// Default: `glovo-scrape/<crate version>`
    pub user_agent: String,

    /// Category label for items extracted outside a category page.
    ///
    /// Default: `Uncategorized`
    pub default_category: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            proxy_base: patterns::DEFAULT_PROXY_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("glovo-scrape/", env!("CARGO_PKG_VERSION")).to_string(),
            default_category: patterns::DEFAULT_CATEGORY.to_string(),
        }
    }
}
