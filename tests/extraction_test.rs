use glovo_scrape::patterns::{AGE_RESTRICTED_URL, FALLBACK_IMAGE_URLS};
use glovo_scrape::{extractor, AgeGate, Item};

fn compact_row(i: usize) -> String {
    format!(
        r#"
        <div class="product-row__content">
            <span data-test-id="product-row-name__highlighter">Product {i}</span>
            <span data-test-id="product-row-description__highlighter">Description {i}</span>
            <img class="product-row__picture" src="https://cdn.test/a{i}.png">
            <span data-test-id="product-price-effective">{i},50 (per kg)</span>
        </div>"#
    )
}

fn store_tile(i: usize) -> String {
    format!(
        r#"
        <div class="ItemTile_itemTile__ob2HL">
            <h3 class="ItemTile_title__aYrXE">Tile {i}</h3>
            <p class="ItemTile_description__Zx91a">Tile description {i}</p>
            <img class="ItemTile_image__Qr45O" src="https://cdn.test/b{i}.png">
            <div class="ItemTile_priceContainer__8hQ2"><span>{i},00</span></div>
        </div>"#
    )
}

fn restaurant_row(i: usize) -> String {
    format!(
        r#"
        <div class="ItemRow_itemRow__k4ndR">
            <h2 class="pintxo-typography-body1">Dish {i}</h2>
            <p class="ItemRow_description__PfM7O">Dish description {i}</p>
            <div class="Thumbnail_pintxo-thumbnail__OkiBe"><img src="https://cdn.test/c{i}.png"></div>
            <span class="pintxo-typography-body2">{i},25</span>
        </div>"#
    )
}

fn page(rows: &[String]) -> String {
    format!("<html><body>{}</body></html>", rows.concat())
}

async fn extract(html: &str, category: &str) -> Vec<Item> {
    let mut gate = AgeGate::new();
    match extractor::extract_items(html, category, None, &mut gate).await {
        Ok(items) => items,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn assert_fully_populated(items: &[Item]) {
    for item in items {
        assert!(!item.name.is_empty() && item.name != "Unnamed item", "{item:?}");
        assert!(!item.description.is_empty(), "{item:?}");
        assert!(item.image_url.starts_with("https://"), "{item:?}");
        assert!(!item.price.is_empty() && !item.price.contains(','), "{item:?}");
    }
}

#[tokio::test]
async fn compact_rows_yield_one_item_per_row() {
    let html = page(&(1..=4).map(compact_row).collect::<Vec<_>>());
    let items = extract(&html, "Fruit").await;

    assert_eq!(items.len(), 4);
    assert_fully_populated(&items);
    assert_eq!(items[1].name, "Product 2");
    assert_eq!(items[1].price, "2.50");
    assert!(items.iter().all(|i| i.category == "Fruit"));
}

#[tokio::test]
async fn store_tiles_yield_one_item_per_tile() {
    let html = page(&(1..=3).map(store_tile).collect::<Vec<_>>());
    let items = extract(&html, "Dairy").await;

    assert_eq!(items.len(), 3);
    assert_fully_populated(&items);
    assert_eq!(items[2].description, "Tile description 3");
    assert_eq!(items[2].price, "3.00");
}

#[tokio::test]
async fn restaurant_rows_yield_one_item_per_row() {
    let html = page(&(1..=5).map(restaurant_row).collect::<Vec<_>>());
    let items = extract(&html, "Mains").await;

    assert_eq!(items.len(), 5);
    assert_fully_populated(&items);
    assert_eq!(items[0].image_url, "https://cdn.test/c1.png");
    assert_eq!(items[4].price, "5.25");
}

#[tokio::test]
async fn mixed_page_is_union_in_shape_order() {
    let html = page(&[restaurant_row(1), store_tile(1), compact_row(1), store_tile(2)]);
    let items = extract(&html, "Mixed").await;

    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Product 1", "Tile 1", "Tile 2", "Dish 1"]);
}

#[tokio::test]
async fn empty_rows_get_defaults() {
    let html = page(&[
        r#"<div class="product-row__content"></div>"#.to_string(),
        r#"<div class="ItemTile_itemTile__ob2HL"><h3 class="ItemTile_title__aYrXE">   </h3></div>"#.to_string(),
    ]);
    let items = extract(&html, "Uncategorized").await;

    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.name, "Unnamed item");
        assert_eq!(item.description, "");
        assert_eq!(item.image_url, "no image found");
        assert_eq!(item.price, "");
    }
}

#[tokio::test]
async fn fallback_images_are_normalized_in_every_shape() {
    let fallback = FALLBACK_IMAGE_URLS[0];
    let html = page(&[
        format!(r#"<div class="product-row__content"><img class="product-row__picture" src="{fallback}"></div>"#),
        format!(r#"<div class="ItemTile_itemTile__ob2HL"><img class="ItemTile_image__Qr45O" src="{fallback}"></div>"#),
        format!(
            r#"<div class="ItemRow_itemRow__k4ndR"><div class="Thumbnail_pintxo-thumbnail__OkiBe"><img src="{fallback}"></div></div>"#
        ),
    ]);
    let items = extract(&html, "Uncategorized").await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.image_url == "no image found"));
}

#[tokio::test]
async fn age_restricted_products_suspend_once_per_gate() {
    let restricted = |name: &str| {
        format!(
            r#"<div class="ItemTile_itemTile__ob2HL">
                <h3 class="ItemTile_title__aYrXE">{name}</h3>
                <img class="ItemTile_image__Qr45O" src="{AGE_RESTRICTED_URL}">
            </div>"#
        )
    };
    let html = page(&[store_tile(1), restricted("Beer"), restricted("Wine"), store_tile(2)]);
    let mut gate = AgeGate::new();

    let items = extractor::extract_items(&html, "Drinks", None, &mut gate).await.unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(gate.suspensions(), 1);
    assert!(gate.is_confirmed());

    // Same gate, next page: already confirmed.
    extractor::extract_items(&html, "Drinks", None, &mut gate).await.unwrap();
    assert_eq!(gate.suspensions(), 1);
}

#[tokio::test]
async fn page_without_listings_yields_nothing() {
    let items = extract("<html><body><h1>Store closed</h1></body></html>", "Uncategorized").await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn malformed_html_does_not_panic() {
    let html = r#"<div class="ItemRow_itemRow__k4ndR"><h2 class="pintxo-typography-body1">Soup<p>unclosed"#;
    let items = extract(html, "Uncategorized").await;
    assert_eq!(items.len(), 1);
    assert!(items[0].name.starts_with("Soup"));
}
