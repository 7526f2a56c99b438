//! DOM Operations Adapter
//!
//! The small document capability the extractor needs: parse, find by CSS
//! selector, read text, read an attribute. Everything maps onto `dom_query`,
//! so shape matchers stay pure functions over a parsed [`Document`] and can be
//! tested against synthetic HTML.

pub use dom_query::{Document, Selection};

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First descendant matching `selector`, in document order.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// All elements of the document matching `selector`, in document order.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Reading ===

/// Trimmed text content of the element and its descendants.
///
/// Returns `None` when the trimmed text is empty, so callers can chain
/// defaults the same way for a missing element and a blank one.
#[must_use]
pub fn text_content(sel: &Selection) -> Option<String> {
    let text = sel.text();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed text of the first descendant matching `selector`.
#[must_use]
pub fn query_text(sel: &Selection, selector: &str) -> Option<String> {
    query_selector(sel, selector).and_then(|found| text_content(&found))
}

/// Attribute value, `None` when missing or blank.
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
