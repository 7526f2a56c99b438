//! Item extraction.
//!
//! Turns one page of markup into finished [`Item`]s:
//!
//! 1. parse and match every known [shape](crate::selector), dropping the
//!    document before anything is awaited;
//! 2. apply field defaults, image resolution and price normalization;
//! 3. pass each item through the [`AgeGate`] before it is appended.

pub mod normalize;

use tracing::debug;
use url::Url;

use crate::age_gate::AgeGate;
use crate::dom;
use crate::error::Result;
use crate::patterns;
use crate::result::Item;
use crate::selector::{self, RawListing};

pub use normalize::{normalize_image, normalize_price};

/// Match every shape on `html`, in emission order.
#[must_use]
pub fn scan(html: &str) -> Vec<RawListing> {
    let doc = dom::parse(html);
    selector::match_all(&doc)
}

/// Apply defaults and normalization to one raw listing.
#[must_use]
pub fn build_item(raw: RawListing, category: &str, page_url: Option<&Url>) -> Item {
    Item {
        name: raw.name.unwrap_or_else(|| patterns::UNNAMED_ITEM.to_string()),
        description: raw.description.unwrap_or_default(),
        image_url: normalize_image(raw.image_src.as_deref(), page_url),
        category: category.to_string(),
        price: raw.price.as_deref().map(normalize_price).unwrap_or_default(),
    }
}

/// Extract all items from one page.
///
/// `page_url` resolves relative image sources. Each item is checked against
/// the age gate before it is appended, so a pending confirmation holds back
/// the triggering item and everything after it.
pub async fn extract_items(
    html: &str,
    category: &str,
    page_url: Option<&Url>,
    gate: &mut AgeGate,
) -> Result<Vec<Item>> {
    let listings = scan(html);
    debug!(count = listings.len(), category, "matched listings");

    let mut items = Vec::with_capacity(listings.len());
    for raw in listings {
        let item = build_item(raw, category, page_url);
        gate.intercept(&item.image_url).await?;
        items.push(item);
    }

    Ok(items)
}
