//! Field normalization shared by every listing shape.

use url::Url;

use crate::patterns;
use crate::url_utils;

/// Normalize price text.
///
/// Keeps the part before the first `(` (drops unit-price annotations such as
/// `(per kg)`), trims it, and turns the decimal comma into a dot.
///
/// ```rust
/// use glovo_scrape::extractor::normalize_price;
///
/// assert_eq!(normalize_price("12,50 (per kg)"), "12.50");
/// assert_eq!(normalize_price("3,00"), "3.00");
/// ```
#[must_use]
pub fn normalize_price(raw: &str) -> String {
    let head = raw.split_once('(').map_or(raw, |(head, _)| head);
    head.trim().replace(',', ".")
}

/// Resolve an image source into the value stored on an item.
///
/// Missing sources and known fallback images become `"no image found"`.
/// Relative sources are resolved against `page_url` when one is known.
#[must_use]
pub fn normalize_image(src: Option<&str>, page_url: Option<&Url>) -> String {
    let Some(src) = src.map(str::trim).filter(|s| !s.is_empty()) else {
        return patterns::NO_IMAGE.to_string();
    };

    let resolved = match page_url {
        Some(base) => url_utils::create_absolute_url(src, base),
        None => src.to_string(),
    };

    if patterns::is_fallback_image(&resolved) {
        return patterns::NO_IMAGE.to_string();
    }
    resolved
}
