//! Output module for writing the catalog and summarizing a run
//!
//! This module handles:
//! - Serializing the final product list as JSON
//! - Writing it to the configured path once the crawl has succeeded
//! - Computing and printing run statistics

mod json;
pub mod stats;

pub use json::{catalog_to_json, write_catalog};
pub use stats::{print_statistics, CatalogStatistics};
