//! Scraper abstraction layer
//!
//! This module defines the trait every upstream scraping backend implements
//! and the errors it can report. Routes only ever see a `dyn Scraper`.

use crate::models::platform::Platform;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error types for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ScraperError {
    /// The bare failure message, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            ScraperError::BadRequest(message)
            | ScraperError::NotFound(message)
            | ScraperError::InvalidResponse(message)
            | ScraperError::Unexpected(message)
            | ScraperError::ApiError { message, .. } => message,
        }
    }
}

/// Trait for upstream media scrapers
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Extract media information for a URL, or run a search for a query
    ///
    /// The result shape is platform-specific and returned as-is.
    async fn scrape(&self, platform: Platform, input: &str) -> Result<Value, ScraperError>;

    /// Get the scraper name
    fn scraper_name(&self) -> &str;
}
