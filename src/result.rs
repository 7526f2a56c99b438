//! Records produced by extraction and discovery.

use serde::{Deserialize, Serialize};

/// One product listing.
///
/// Every field is always populated: absent markup resolves to the defaults in
/// [`patterns`](crate::patterns), never to an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Product name, or `"Unnamed item"`.
    pub name: String,

    /// Product description, empty when absent.
    pub description: String,

    /// Absolute image URL, or `"no image found"`.
    pub image_url: String,

    /// Category label the item was extracted under.
    pub category: String,

    /// Normalized price text (`"12.50"`), empty when absent.
    pub price: String,
}

/// A sub-category found on a store index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display label.
    pub name: String,

    /// Fetchable URL for the category's listing.
    pub url: String,
}
