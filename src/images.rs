//! Dish image harvesting from pasted markup.
//!
//! Independent of the listing shapes: takes any HTML fragment (typically the
//! body of a dish page copied from the browser) and collects every image
//! source except decorative icons and SVG graphics.

use url::Url;

use crate::dom;
use crate::patterns;
use crate::url_utils;

/// Image sources in `html`, in document order.
///
/// Relative sources are resolved against `base` when given. Empty sources,
/// [ignored](patterns::IGNORED_IMAGE_URLS) icons and `.svg` files are dropped.
#[must_use]
pub fn harvest_image_urls(html: &str, base: Option<&Url>) -> Vec<String> {
    let doc = dom::parse(html);

    dom::select_all(&doc, "img")
        .iter()
        .filter_map(|img| dom::get_attribute(img, "src"))
        .map(|src| match base {
            Some(base) => url_utils::create_absolute_url(&src, base),
            None => src,
        })
        .filter(|src| !patterns::is_ignored_image(src) && !is_svg(src))
        .collect()
}

fn is_svg(src: &str) -> bool {
    src.to_ascii_lowercase().ends_with(".svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_filters_svg_and_ignored() {
        let html = format!(
            r#"
            <body>
                <img src="https://cdn.test/dish1.jpg">
                <img src="https://cdn.test/logo.SVG">
                <img src="{}">
                <img src="">
                <img alt="no src">
                <img src="https://cdn.test/dish2.webp">
            </body>
        "#,
            patterns::IGNORED_IMAGE_URLS[1]
        );

        assert_eq!(
            harvest_image_urls(&html, None),
            vec!["https://cdn.test/dish1.jpg", "https://cdn.test/dish2.webp"]
        );
    }

    #[test]
    fn test_harvest_resolves_relative_sources() {
        let base = Url::parse("https://glovoapp.com/es/en/madrid/").unwrap();
        let html = r#"<img src="/media/dish.png">"#;

        assert_eq!(
            harvest_image_urls(html, Some(&base)),
            vec!["https://glovoapp.com/media/dish.png"]
        );
    }

    #[test]
    fn test_harvest_nothing_found() {
        assert!(harvest_image_urls("<p>no pictures</p>", None).is_empty());
    }
}
