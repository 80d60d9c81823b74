//! Response bodies returned by the HTTP routes

use serde::Serialize;
use serde_json::Value;

/// Success body of every downloader route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiEnvelope {
    pub data: Value,
}

/// Error body of every route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Human-readable rendering of a downloader response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResult {
    pub text: String,
    pub download_url: Option<String>,
}
