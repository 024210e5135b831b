//! Statistics for a finished crawl

use crate::crawler::CrawlOutcome;
use std::collections::HashSet;

/// Catalog statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStatistics {
    /// Number of listing pages fetched
    pub pages_fetched: usize,

    /// Number of product variants in the catalog
    pub total_products: usize,

    /// Number of distinct product titles
    pub distinct_titles: usize,

    pub available: usize,

    pub unavailable: usize,

    /// Variants with a known shipping date
    pub with_shipping_date: usize,
}

impl CatalogStatistics {
    /// Computes statistics from a crawl outcome
    pub fn from_outcome(outcome: &CrawlOutcome) -> Self {
        let products = &outcome.products;
        let available = products.iter().filter(|p| p.is_available).count();

        Self {
            pages_fetched: outcome.pages_fetched,
            total_products: products.len(),
            distinct_titles: products
                .iter()
                .map(|p| p.title.as_str())
                .collect::<HashSet<_>>()
                .len(),
            available,
            unavailable: products.len() - available,
            with_shipping_date: products.iter().filter(|p| p.has_shipping_date()).count(),
        }
    }

    /// Share of variants that are available, as a percentage
    pub fn availability_rate(&self) -> f64 {
        if self.total_products == 0 {
            return 0.0;
        }
        (self.available as f64 / self.total_products as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CatalogStatistics) {
    println!("=== Catalog Statistics ===\n");

    println!("Overview:");
    println!("  Pages fetched: {}", stats.pages_fetched);
    println!("  Product variants: {}", stats.total_products);
    println!("  Distinct titles: {}", stats.distinct_titles);
    println!();

    println!("Availability:");
    println!("  Available: {}", stats.available);
    println!("  Unavailable: {}", stats.unavailable);
    println!("  With shipping date: {}", stats.with_shipping_date);
    println!();

    println!(
        "Availability Rate: {:.1}% ({} / {} variants)",
        stats.availability_rate(),
        stats.available,
        stats.total_products
    );
}
