//! Document sources
//!
//! A document source turns a URL into a parsed HTML tree or fails. The
//! HTTP implementation makes one attempt per URL; there is no retry.

use crate::config::{Config, UserAgentConfig};
use crate::CatalogError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Supplies parsed listing pages to the crawler
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Fetches and parses the page at `url`
    async fn fetch_document(&self, url: &str) -> Result<Html, CatalogError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `timeout` - Whole-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10).min(timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a source from the crawler and user agent configuration
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let timeout = Duration::from_secs(config.crawler.timeout_secs);
        let client = build_http_client(&config.user_agent, timeout).map_err(CatalogError::Client)?;
        Ok(Self::with_client(client))
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the raw body of a page
    ///
    /// Non-success status codes are errors.
    pub async fn fetch_body(&self, url: &str) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| CatalogError::Http {
            url: url.to_string(),
            source,
        })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch_document(&self, url: &str) -> Result<Html, CatalogError> {
        let body = self.fetch_body(url).await?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(Html::parse_document(&body))
    }
}
