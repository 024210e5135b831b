//! Configuration module for Catalog-Crawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file or section falls back to the built-in
//! crawl target.
//!
//! # Example
//!
//! ```no_run
//! use catalog_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("catalog.toml")).unwrap();
//! println!("Crawl starts at: {}", config.crawler.entry_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_ENTRY_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
