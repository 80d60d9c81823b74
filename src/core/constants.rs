//! Constants shared by the routes and the scraper client
//!
//! Route paths, fixed error messages and service identity strings.

/// Service identity
pub mod service {
    /// Human-readable service name
    pub const NAME: &str = "Media Downloader Proxy";

    /// Crate version
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Route path constants
pub mod route {
    /// Form UI
    pub const INDEX: &str = "/";

    /// Health check
    pub const HEALTH: &str = "/health";

    /// Downloader route, one per platform slug
    pub const DOWNLOADER: &str = "/api/downloader/{platform}";

    /// Formatting route, one per platform slug
    pub const FORMAT: &str = "/api/format/{platform}";
}

/// Error message constants
pub mod message {
    /// Fallback when an upstream failure carries no message
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}
