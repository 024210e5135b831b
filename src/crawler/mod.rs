//! Crawler module for fetching listing pages and building the catalog
//!
//! This module contains:
//! - The document source abstraction and its HTTP implementation
//! - The crawl loop that visits the entry page and its sibling pages

mod coordinator;
mod fetcher;

pub use coordinator::{CrawlOutcome, Coordinator};
pub use fetcher::{build_http_client, DocumentSource, HttpSource};

use crate::config::Config;
use crate::CatalogError;

/// Runs a complete crawl against the live site
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch and extract the entry page
/// 3. Fetch and extract every other page linked from it
/// 4. Return the deduplicated catalog
///
/// Any fetch failure aborts the run.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl completed successfully
/// * `Err(CatalogError)` - A page could not be fetched
pub async fn crawl(config: &Config) -> Result<CrawlOutcome, CatalogError> {
    let source = HttpSource::new(config)?;
    Coordinator::new(source, &config.crawler).run().await
}
