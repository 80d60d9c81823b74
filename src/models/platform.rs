//! Supported media platforms
//!
//! Every downloader route is keyed by a platform slug. The slug, the label
//! shown in the form and the query parameter the route reads all live here.

use std::fmt;

/// Media source a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    TikTok,
    YoutubeMp3,
    YoutubeMp4,
    Facebook,
    YoutubeSearch,
}

impl Platform {
    /// All platforms in the order the form lists them
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YoutubeMp3,
        Platform::YoutubeMp4,
        Platform::Facebook,
        Platform::YoutubeSearch,
    ];

    /// Parse a route slug such as `igdl` (case-insensitive)
    pub fn from_slug(s: &str) -> Option<Self> {
        let slug = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Route slug, also the upstream endpoint name
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Instagram => "igdl",
            Platform::TikTok => "ttdl",
            Platform::YoutubeMp3 => "ytmp3",
            Platform::YoutubeMp4 => "ytmp4",
            Platform::Facebook => "fbdl",
            Platform::YoutubeSearch => "ytsearch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YoutubeMp3 => "YouTube MP3",
            Platform::YoutubeMp4 => "YouTube MP4",
            Platform::Facebook => "Facebook",
            Platform::YoutubeSearch => "YouTube Search",
        }
    }

    /// Name of the query parameter carrying the user input
    pub fn query_param(self) -> &'static str {
        match self {
            Platform::YoutubeSearch => "query",
            _ => "url",
        }
    }

    /// Fixed error message returned when the input parameter is missing
    pub fn missing_input_message(self) -> &'static str {
        match self {
            Platform::YoutubeSearch => "Missing query parameter",
            _ => "Missing url parameter",
        }
    }

    /// Whether the upstream answers with a `{ data: [ { url }, ... ] }` list
    pub fn is_media_list(self) -> bool {
        matches!(self, Platform::Instagram | Platform::Facebook)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
