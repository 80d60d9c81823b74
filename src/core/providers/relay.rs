//! HTTP relay scraper implementation
//!
//! Forwards each request to a scraping API that exposes one endpoint per
//! platform slug, e.g. `GET {base_url}/igdl?url=...`.

use crate::core::provider::{Scraper, ScraperError};
use crate::models::platform::Platform;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Scraper backed by a remote HTTP scraping API
pub struct RelayScraper {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RelayScraper {
    /// Create a new relay scraper
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the scraping API
    /// * `api_key` - Optional bearer token sent with every request
    /// * `timeout` - Request timeout in seconds
    pub fn new(base_url: String, api_key: Option<String>, timeout: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Upstream endpoint for a platform
    fn endpoint_url(&self, platform: Platform) -> String {
        format!("{}/{}", self.base_url, platform.slug())
    }

    /// Pull a readable message out of an upstream error body
    ///
    /// Prefers the JSON `error` or `message` field, then the raw text.
    fn extract_error_message(error_text: &str) -> String {
        if let Ok(body) = serde_json::from_str::<Value>(error_text) {
            for key in ["error", "message"] {
                if let Some(message) = body.get(key).and_then(Value::as_str) {
                    if !message.is_empty() {
                        return message.to_string();
                    }
                }
            }
        }

        error_text.trim().to_string()
    }

    fn classify_status(status: u16, message: String) -> ScraperError {
        match status {
            400 => ScraperError::BadRequest(message),
            404 => ScraperError::NotFound(message),
            _ => ScraperError::ApiError { status, message },
        }
    }
}

#[async_trait]
impl Scraper for RelayScraper {
    async fn scrape(&self, platform: Platform, input: &str) -> Result<Value, ScraperError> {
        let url = self.endpoint_url(platform);

        debug!("Sending request to scraper: platform={}, url={}", platform, url);

        let mut req_builder = self
            .client
            .get(&url)
            .query(&[(platform.query_param(), input)]);

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ScraperError::Unexpected("Upstream request timed out".to_string())
            } else {
                ScraperError::Unexpected(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = Self::extract_error_message(&error_text);
            warn!(
                "Scraper returned error: platform={}, status={}, message={}",
                platform,
                status.as_u16(),
                message
            );
            return Err(Self::classify_status(status.as_u16(), message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScraperError::Unexpected(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| ScraperError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    fn scraper_name(&self) -> &str {
        "Relay"
    }
}
