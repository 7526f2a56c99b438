//! URL Utility Functions
//!
//! Query stripping, category URL derivation, proxy URL construction and
//! relative image resolution.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Mirrors how a browser resolves `img.src`: absolute and `data:` URLs are
/// kept, anything else is joined onto `base`.
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:") {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Everything before the first `?`.
///
/// Done textually rather than through `Url` so the rest of the URL keeps the
/// exact spelling the user pasted.
#[must_use]
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(head, _)| head)
}

/// URL of a store category: the store URL without its query, plus
/// `?content=<identifier>`.
#[must_use]
pub fn category_url(original_url: &str, identifier: &str) -> String {
    format!(
        "{}?{}={}",
        strip_query(original_url),
        patterns::CATEGORY_QUERY_PARAM,
        urlencoding::encode(identifier)
    )
}

/// Proxy request URL carrying `target` as its `url` parameter.
pub fn proxy_url(proxy_base: &str, target: &str) -> Result<Url> {
    Url::parse_with_params(proxy_base, &[("url", target)]).map_err(|e| Error::InvalidUrl {
        url: proxy_base.to_string(),
        reason: e.to_string(),
    })
}
