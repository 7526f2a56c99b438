//! Store category discovery.
//!
//! Large stores render an index of sub-categories instead of products. Each
//! entry carries a `data-testid="list-item-…"` marker; its value is what the
//! store page expects in the `content` query parameter.

use dom_query::Document;

use crate::dom;
use crate::patterns;
use crate::result::Category;
use crate::url_utils;

/// Categories listed on a store page, in document order.
///
/// An empty result means the page is a flat listing.
#[must_use]
pub fn discover(doc: &Document, original_url: &str) -> Vec<Category> {
    dom::select_all(doc, patterns::CATEGORY_MARKER)
        .iter()
        .filter_map(|entry| {
            let name = dom::query_text(entry, patterns::CATEGORY_LABEL)?;
            let url = match dom::get_attribute(entry, patterns::CATEGORY_ID_ATTR) {
                Some(id) => url_utils::category_url(original_url, &id),
                None => original_url.to_string(),
            };
            Some(Category { name, url })
        })
        .collect()
}

/// [`discover`] over raw markup.
#[must_use]
pub fn discover_in_html(html: &str, original_url: &str) -> Vec<Category> {
    discover(&dom::parse(html), original_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "https://glovoapp.com/es/en/madrid/supermarket/?utm=x";

    #[test]
    fn test_discover_reads_label_and_identifier() {
        let html = r#"
            <div data-testid="list-item-fruit">
                <p class="pintxo-typography-body2">Fruit</p>
            </div>
            <div data-testid="list-item-dairy">
                <p class="pintxo-typography-body2-emphasis">Dairy</p>
            </div>
        "#;

        let categories = discover_in_html(html, STORE);
        assert_eq!(
            categories,
            vec![
                Category {
                    name: "Fruit".to_string(),
                    url: "https://glovoapp.com/es/en/madrid/supermarket/?content=list-item-fruit".to_string(),
                },
                Category {
                    name: "Dairy".to_string(),
                    url: "https://glovoapp.com/es/en/madrid/supermarket/?content=list-item-dairy".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_discover_skips_unlabelled_entries() {
        let html = r#"
            <div data-testid="list-item-empty"><span>icon</span></div>
            <div data-testid="list-item-blank"><p class="pintxo-typography-body2">  </p></div>
            <div data-testid="list-item-bread"><p class="pintxo-typography-body2">Bread</p></div>
        "#;

        let names: Vec<_> = discover_in_html(html, STORE).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bread"]);
    }

    #[test]
    fn test_discover_first_label_in_document_order_wins() {
        let html = r#"
            <div data-testid="list-item-x">
                <p class="pintxo-typography-body2-emphasis">First</p>
                <p class="pintxo-typography-body2">Second</p>
            </div>
        "#;

        let categories = discover_in_html(html, STORE);
        assert_eq!(categories[0].name, "First");
    }

    #[test]
    fn test_discover_ignores_other_markers() {
        let html = r#"
            <div data-testid="header"><p class="pintxo-typography-body2">Header</p></div>
            <div data-testid="product-list-item-1"><p class="pintxo-typography-body2">Nope</p></div>
        "#;

        assert!(discover_in_html(html, STORE).is_empty());
    }

    #[test]
    fn test_flat_listing_has_no_categories() {
        let html = r#"<div class="ItemTile_itemTile__ob2HL"><h3 class="ItemTile_title__aYrXE">Milk</h3></div>"#;
        assert!(discover_in_html(html, STORE).is_empty());
    }
}
