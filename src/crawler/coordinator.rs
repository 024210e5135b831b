//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl is strictly sequential:
//! - Fetch the entry page, extract its products, collect its page links
//! - Fetch each collected link in order, extracting into the same catalog
//! - Hand back the catalog in first-seen order
//!
//! Links found on pages other than the entry page are not followed.

use crate::catalog::{discover_pages, extract_products, Catalog, Product};
use crate::config::CrawlerConfig;
use crate::crawler::DocumentSource;
use crate::CatalogError;
use scraper::Html;

/// Result of a successful crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Deduplicated products in first-seen order
    pub products: Vec<Product>,

    /// Number of pages fetched, entry page included
    pub pages_fetched: usize,
}

/// Main crawler coordinator structure
pub struct Coordinator<S> {
    source: S,
    entry_url: String,
    base_path: String,
}

impl<S: DocumentSource> Coordinator<S> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `source` - Where pages are fetched from
    /// * `config` - Entry URL and base path of the crawl
    pub fn new(source: S, config: &CrawlerConfig) -> Self {
        Self {
            source,
            entry_url: config.entry_url.clone(),
            base_path: config.base_path.clone(),
        }
    }

    /// Runs the crawl to completion
    ///
    /// The first fetch failure ends the run with that error; no products
    /// are returned in that case.
    pub async fn run(&self) -> Result<CrawlOutcome, CatalogError> {
        tracing::info!("Starting crawl at {}", self.entry_url);
        let start_time = std::time::Instant::now();

        let mut catalog = Catalog::new();

        let pages: Vec<String> = {
            let entry = self.process_page(&self.entry_url, &mut catalog).await?;
            discover_pages(&entry, &self.base_path).collect()
        };
        tracing::debug!("Entry page links to {} other pages", pages.len());

        let mut pages_fetched = 1;
        for page in pages.iter().filter(|page| !page.is_empty()) {
            self.process_page(page, &mut catalog).await?;
            pages_fetched += 1;
        }

        tracing::info!(
            "Crawl completed: {} products from {} pages in {:?}",
            catalog.len(),
            pages_fetched,
            start_time.elapsed()
        );

        Ok(CrawlOutcome {
            products: catalog.into_products(),
            pages_fetched,
        })
    }

    /// Fetches one page and merges its products into the catalog
    async fn process_page(&self, url: &str, catalog: &mut Catalog) -> Result<Html, CatalogError> {
        tracing::info!("Fetching {}", url);
        let document = self.source.fetch_document(url).await?;

        let added = extract_products(&document, catalog, &self.base_path);
        tracing::debug!("{} new products from {} ({} total)", added, url, catalog.len());

        Ok(document)
    }
}
