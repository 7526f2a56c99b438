//! Listing Shapes
//!
//! The platform has shipped several markup generations for product listings.
//! Each generation is described here as a [`Shape`]: a row selector plus one
//! selector per field. Matching is a pure pass over a parsed document that
//! yields [`RawListing`]s with whatever text the markup actually had; defaults
//! and normalization happen later in [`extractor`](crate::extractor).
//!
//! Shapes are not a priority chain. Every shape is matched against the whole
//! document and the results are concatenated in [`SHAPES`] order.

use dom_query::{Document, Selection};

use crate::dom;

/// Markup generation a listing was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Compact product rows (`product-row__content`).
    CompactRow,
    /// Store item tiles (`ItemTile_itemTile`).
    StoreTile,
    /// Restaurant menu rows (`ItemRow_itemRow`).
    RestaurantRow,
}

/// Selectors describing one listing shape.
///
/// Field selectors are evaluated inside the matched row. `price` is a fallback
/// chain: the first selector whose element has non-blank text wins.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    pub row: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price: &'static [&'static str],
}

/// Known shapes, in emission order.
pub static SHAPES: [Shape; 3] = [
    Shape {
        kind: ShapeKind::CompactRow,
        row: "div.product-row__content",
        name: r#"[data-test-id="product-row-name__highlighter"]"#,
        description: r#"[data-test-id="product-row-description__highlighter"]"#,
        image: "img.product-row__picture",
        price: &[r#"[data-test-id="product-price-effective"]"#],
    },
    Shape {
        kind: ShapeKind::StoreTile,
        row: "div.ItemTile_itemTile__ob2HL",
        name: "h3.ItemTile_title__aYrXE",
        description: r#"p[class*="ItemTile_description"]"#,
        image: "img.ItemTile_image__Qr45O",
        // New price container first, legacy price element second.
        price: &[
            r#"div[class*="ItemTile_priceContainer"]"#,
            r#"span[class*="ItemTile_price"]"#,
        ],
    },
    Shape {
        kind: ShapeKind::RestaurantRow,
        row: "div.ItemRow_itemRow__k4ndR",
        name: "h2.pintxo-typography-body1",
        description: "p.ItemRow_description__PfM7O",
        image: "div.Thumbnail_pintxo-thumbnail__OkiBe img",
        price: &["span.pintxo-typography-body2"],
    },
];

/// Field values read from one matched row, before defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub shape: ShapeKind,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `src` attribute as written in the markup (possibly relative).
    pub image_src: Option<String>,
    /// Price text before normalization.
    pub price: Option<String>,
}

/// Trimmed text of the first selector in `chain` that yields non-blank text.
#[must_use]
pub fn first_text(row: &Selection, chain: &[&str]) -> Option<String> {
    chain.iter().find_map(|selector| dom::query_text(row, selector))
}

/// Read one row according to `shape`.
#[must_use]
pub fn read_row(shape: &Shape, row: &Selection) -> RawListing {
    RawListing {
        shape: shape.kind,
        name: dom::query_text(row, shape.name),
        description: dom::query_text(row, shape.description),
        image_src: dom::query_selector(row, shape.image)
            .and_then(|img| dom::get_attribute(&img, "src")),
        price: first_text(row, shape.price),
    }
}

/// All listings of one shape, in document order.
#[must_use]
pub fn match_shape(doc: &Document, shape: &Shape) -> Vec<RawListing> {
    dom::select_all(doc, shape.row)
        .iter()
        .map(|row| read_row(shape, row))
        .collect()
}

/// All listings of every known shape: compact rows, then store tiles, then
/// restaurant rows.
#[must_use]
pub fn match_all(doc: &Document) -> Vec<RawListing> {
    SHAPES.iter().flat_map(|shape| match_shape(doc, shape)).collect()
}
