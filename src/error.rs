//! Error types for glovo-scrape.
//!
//! Missing markup is never an error: absent fields resolve to per-field
//! defaults and an empty page simply yields no items. Errors here are about
//! getting the page in the first place, or about the age confirmation hook.

/// Error type for fetch and aggregation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The proxy answered with a non-success status.
    #[error("Proxy fetch failed with status {status} for {url}")]
    ProxyFetch {
        /// HTTP status returned by the proxy.
        status: u16,
        /// Target page URL that was requested through the proxy.
        url: String,
    },

    /// The proxy did not answer within the configured timeout.
    #[error("Proxy fetch timed out for {url}")]
    Timeout {
        /// Target page URL that was requested through the proxy.
        url: String,
    },

    /// Transport-level failure (connection refused, TLS, body decoding).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A URL could not be parsed or built.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The age confirmation hook refused to confirm.
    #[error("Age confirmation was declined")]
    AgeConfirmationDeclined,
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
