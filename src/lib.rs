//! # glovo-scrape
//!
//! Product listing scraper for Glovo store and restaurant pages.
//!
//! Pages are fetched through a CORS proxy, matched against the platform's
//! known listing markup, and normalized into [`Item`] records (name,
//! description, image URL, price, category).
//!
//! ## Quick Start
//!
//! ```rust
//! use glovo_scrape::extractor;
//!
//! let html = r#"
//!     <div class="ItemTile_itemTile__ob2HL">
//!         <h3 class="ItemTile_title__aYrXE">Oat milk</h3>
//!         <span class="ItemTile_price__l7">1,95 (1,95 €/l)</span>
//!     </div>"#;
//!
//! let listings = extractor::scan(html);
//! let item = extractor::build_item(listings[0].clone(), "Dairy", None);
//! assert_eq!(item.name, "Oat milk");
//! assert_eq!(item.price, "1.95");
//! assert_eq!(item.image_url, "no image found");
//! ```
//!
//! Network loads go through a [`Session`], which also runs the age gate:
//!
//! ```rust,no_run
//! use glovo_scrape::{presenter::ItemTable, Options, Session};
//!
//! # async fn load() -> glovo_scrape::Result<()> {
//! let mut session = Session::new(Options::default())?;
//! let items = session.run_restaurant("https://glovoapp.com/es/en/madrid/some-restaurant/").await?;
//! println!("{}", ItemTable::new(items).render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Components
//!
//! - **Fetching**: [`ProxyFetcher`] behind the [`PageFetcher`] trait
//! - **Category discovery**: [`category::discover`]
//! - **Extraction**: [`extractor::extract_items`] over the shapes in [`selector`]
//! - **Age gate**: [`AgeGate`] with a pluggable [`AgeConfirmation`] hook
//! - **Aggregation**: [`Session`]
//! - **Presentation**: [`presenter::ItemTable`]

mod error;
mod options;
mod result;

/// Fixed URLs, sentinels and selectors tied to the platform's markup.
pub mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Listing shapes and the pure matcher over a parsed document.
pub mod selector;

/// Item extraction and field normalization.
pub mod extractor;

/// Store category discovery.
pub mod category;

/// Age confirmation gate.
pub mod age_gate;

/// Page fetching through the CORS proxy.
pub mod fetch;

/// Scraping session (aggregator).
pub mod session;

/// Grouped table output and per-column copy text.
pub mod presenter;

/// Dish image harvesting from pasted markup.
pub mod images;

/// URL utilities for query stripping, category URLs and resolution.
pub mod url_utils;

// Public API - re-exports
pub use age_gate::{AgeConfirmation, AgeGate, AutoConfirm};
pub use error::{Error, Result};
pub use fetch::{PageFetcher, ProxyFetcher};
pub use options::Options;
pub use result::{Category, Item};
pub use session::Session;
