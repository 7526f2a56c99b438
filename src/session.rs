//! Scraping session: fetch, discover, extract, aggregate.
//!
//! A [`Session`] owns the state that outlives a single page: the age gate and
//! the current item collection. Loads take `&mut self`, so only one load can
//! be in flight per session, and categories are fetched one after another.

use tracing::{info, warn};
use url::Url;

use crate::age_gate::{AgeConfirmation, AgeGate};
use crate::category;
use crate::error::{Error, Result};
use crate::extractor;
use crate::fetch::{PageFetcher, ProxyFetcher};
use crate::options::Options;
use crate::result::{Category, Item};
use crate::url_utils;

/// Aggregates items from store and restaurant pages.
#[derive(Debug)]
pub struct Session<F = ProxyFetcher> {
    options: Options,
    fetcher: F,
    age_gate: AgeGate,
    items: Vec<Item>,
}

impl Session<ProxyFetcher> {
    /// Session fetching through the configured proxy.
    pub fn new(options: Options) -> Result<Self> {
        let fetcher = ProxyFetcher::new(&options)?;
        Ok(Self::with_fetcher(options, fetcher))
    }
}

impl<F: PageFetcher> Session<F> {
    /// Session using a custom page source.
    pub fn with_fetcher(options: Options, fetcher: F) -> Self {
        Self {
            options,
            fetcher,
            age_gate: AgeGate::new(),
            items: Vec::new(),
        }
    }

    /// Replace the age confirmation hook. The gate starts unconfirmed.
    #[must_use]
    pub fn with_age_confirmation(mut self, confirmation: impl AgeConfirmation + 'static) -> Self {
        self.age_gate = AgeGate::with_confirmation(confirmation);
        self
    }

    /// Items from the most recent load.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn age_gate(&self) -> &AgeGate {
        &self.age_gate
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Drop all items and re-arm the age gate.
    pub fn clear(&mut self) {
        self.items.clear();
        self.age_gate.reset();
    }

    /// Load a store page.
    ///
    /// When the page is a category index, every category is fetched in order
    /// and a category that fails is logged and skipped. Otherwise items are
    /// extracted from the store page itself. Failing to fetch the store page
    /// aborts the load.
    pub async fn run_store(&mut self, store_url: &str) -> Result<&[Item]> {
        let store_url = required_url(store_url, "store")?;
        self.items.clear();

        info!(url = store_url, "Fetching store page");
        let html = self.fetcher.fetch(store_url).await?;
        let categories = category::discover_in_html(&html, store_url);

        if categories.is_empty() {
            let page_url = Url::parse(store_url).ok();
            let items = extractor::extract_items(
                &html,
                &self.options.default_category,
                page_url.as_ref(),
                &mut self.age_gate,
            )
            .await?;
            self.items = items;
        } else {
            info!(count = categories.len(), "store has categories");
            for category in &categories {
                match self.load_category(category).await {
                    Ok(items) => self.items.extend(items),
                    Err(err) => warn!(category = %category.name, error = %err, "skipping category"),
                }
            }
        }

        self.report();
        Ok(&self.items)
    }

    /// Load a restaurant page: query string stripped, one fetch, one extraction.
    pub async fn run_restaurant(&mut self, restaurant_url: &str) -> Result<&[Item]> {
        let clean_url = url_utils::strip_query(required_url(restaurant_url, "restaurant")?);
        self.items.clear();

        info!(url = clean_url, "Fetching restaurant page");
        let html = self.fetcher.fetch(clean_url).await?;
        let page_url = Url::parse(clean_url).ok();
        self.items = extractor::extract_items(
            &html,
            &self.options.default_category,
            page_url.as_ref(),
            &mut self.age_gate,
        )
        .await?;

        self.report();
        Ok(&self.items)
    }

    /// Extract items from markup already at hand, replacing the collection.
    pub async fn run_html(&mut self, html: &str, page_url: Option<&Url>) -> Result<&[Item]> {
        self.items.clear();
        self.items = extractor::extract_items(
            html,
            &self.options.default_category,
            page_url,
            &mut self.age_gate,
        )
        .await?;

        self.report();
        Ok(&self.items)
    }

    async fn load_category(&mut self, category: &Category) -> Result<Vec<Item>> {
        info!("Fetching images from category: {}", category.name);
        let html = self.fetcher.fetch(&category.url).await?;
        let page_url = Url::parse(&category.url).ok();
        extractor::extract_items(&html, &category.name, page_url.as_ref(), &mut self.age_gate).await
    }

    fn report(&self) {
        if self.items.is_empty() {
            warn!("No items found.");
        } else {
            info!(count = self.items.len(), "extracted items");
        }
    }
}

fn required_url<'a>(url: &'a str, kind: &str) -> Result<&'a str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::InvalidUrl {
            url: String::new(),
            reason: format!("no {kind} URL given"),
        });
    }
    Ok(url)
}
