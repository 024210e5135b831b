//! Catalog module for turning listing pages into product records
//!
//! This module contains:
//! - The product record and its JSON shape
//! - The run-scoped accumulator that deduplicates colour variants
//! - Product extraction from a listing page
//! - Pagination link discovery

mod accumulator;
mod extractor;
mod pagination;
mod product;
pub mod selectors;

pub use accumulator::{variant_key, Catalog};
pub use extractor::extract_products;
pub use pagination::discover_pages;
pub use product::{Product, OUT_OF_STOCK};
