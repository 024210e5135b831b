//! Catalog-Crawl: a product catalog harvester
//!
//! This crate crawls a paginated product listing, extracts every product
//! colour variant, normalizes its fields and emits a deduplicated catalog.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod normalize;
pub mod output;

use thiserror::Error;

/// Main error type for Catalog-Crawl operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Returns true if the error came from obtaining a page
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::HttpStatus { .. } | Self::Client(_)
        )
    }

    /// The URL that failed, for fetch errors that carry one
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Http { url, .. } | Self::HttpStatus { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Catalog-Crawl operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Catalog, Product};
pub use config::Config;
pub use crawler::{crawl, CrawlOutcome};
