//! Fixed URLs, sentinels and CSS selectors for Glovo markup.
//!
//! Everything coupled to the platform's markup lives here so that a markup
//! change touches one file.

// =============================================================================
// Sentinels and defaults
// =============================================================================

/// Name used when a listing has no readable name.
pub const UNNAMED_ITEM: &str = "Unnamed item";

/// Image value used when a listing has no image or only a fallback image.
pub const NO_IMAGE: &str = "no image found";

/// Category label for items extracted outside a category page.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Proxy that relays the target page's raw markup.
pub const DEFAULT_PROXY_BASE: &str = "https://glovo-proxy.onrender.com/fetch";

// =============================================================================
// Known image URLs
// =============================================================================

/// Blurred placeholder shown instead of an age-restricted product image.
pub const AGE_RESTRICTED_URL: &str =
    "https://glovo.dhmedia.io/image/customer-assets-glovo/product_restriction/Blurredcontent04.png";

/// Placeholder images the platform shows when a product has no picture.
pub const FALLBACK_IMAGE_URLS: &[&str] =
    &["https://glovo.dhmedia.io/image/customer-assets-glovo/store/productFallback.svg"];

/// Decorative store-card icons that are never product images.
pub const IGNORED_IMAGE_URLS: &[&str] = &[
    "https://glovo.dhmedia.io/image/customer-assets-glovo/StoreInfoCard/RatingLight.png",
    "https://glovo.dhmedia.io/image/customer-assets-glovo/StoreInfoCard/PrimeTagIcon.png",
    "https://glovo.dhmedia.io/image/customer-assets-glovo/StoreInfoCard/PromoTagIcon.png",
    "https://glovo.dhmedia.io/image/customer-assets-glovo/product_restriction/Blurredcontent01.png",
];

/// Returns true for known fallback-image URLs.
#[must_use]
pub fn is_fallback_image(url: &str) -> bool {
    FALLBACK_IMAGE_URLS.contains(&url)
}

/// Returns true for decorative icons that should not be shown or harvested.
#[must_use]
pub fn is_ignored_image(url: &str) -> bool {
    IGNORED_IMAGE_URLS.contains(&url)
}

// =============================================================================
// Category index
// =============================================================================

/// Category entries on a store index page.
pub const CATEGORY_MARKER: &str = r#"div[data-testid^="list-item-"]"#;

/// Attribute holding the category identifier.
pub const CATEGORY_ID_ATTR: &str = "data-testid";

/// Label-bearing children of a category entry; first in document order wins.
pub const CATEGORY_LABEL: &str = "p.pintxo-typography-body2, p.pintxo-typography-body2-emphasis";

/// Query parameter selecting a category's content.
pub const CATEGORY_QUERY_PARAM: &str = "content";
