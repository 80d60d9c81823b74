//! Scraper implementations

pub mod relay;

pub use relay::RelayScraper;
