//! Downloader response to display text conversion
//!
//! Turns the `{ "data": ... }` body of a downloader route into the
//! multi-line text shown in the form, and picks the one link offered as a
//! direct download. Absent fields render as an empty string; unknown fields
//! are ignored.

use crate::models::platform::Platform;
use crate::models::response::FormattedResult;
use serde_json::Value;

/// Labelled fields printed for a TikTok video
const TIKTOK_FIELDS: &[(&str, &str)] = &[
    ("Title", "title"),
    ("Author", "author"),
    ("Username", "username"),
    ("Published", "published"),
    ("Likes", "like"),
    ("Comments", "comment"),
    ("Shares", "share"),
    ("Views", "views"),
    ("Video URL", "video"),
    ("Cover URL", "cover"),
    ("Music URL", "music"),
    ("Profile Picture", "profilePicture"),
];

const YOUTUBE_AUDIO_FIELDS: &[(&str, &str)] = &[
    ("Title", "title"),
    ("Author", "author"),
    ("Duration", "duration"),
    ("Views", "views"),
    ("Audio URL", "audio"),
    ("Thumbnail", "thumbnail"),
    ("Description", "description"),
];

const YOUTUBE_VIDEO_FIELDS: &[(&str, &str)] = &[
    ("Title", "title"),
    ("Author", "author"),
    ("Duration", "duration"),
    ("Views", "views"),
    ("Video URL", "video"),
    ("Audio URL", "audio"),
    ("Thumbnail", "thumbnail"),
    ("Description", "description"),
];

/// Format a downloader response body as display text
///
/// # Arguments
///
/// * `platform` - Platform the response came from
/// * `body` - The route's JSON body, `{ "data": payload }`
pub fn format_result(platform: Platform, body: &Value) -> String {
    let payload = payload(body);

    match platform {
        Platform::Instagram | Platform::Facebook => format_media_list(payload),
        Platform::TikTok => format_fields(payload, TIKTOK_FIELDS),
        Platform::YoutubeMp3 => format_fields(payload, YOUTUBE_AUDIO_FIELDS),
        Platform::YoutubeMp4 => format_fields(payload, YOUTUBE_VIDEO_FIELDS),
        Platform::YoutubeSearch => format_search(payload),
    }
}

/// Pick the single link offered as a direct download, if the payload has one
pub fn primary_download_link(platform: Platform, body: &Value) -> Option<String> {
    let payload = payload(body);

    let link = match platform {
        Platform::Instagram | Platform::Facebook => {
            payload.as_array()?.first()?.get("url")?.as_str()?
        }
        Platform::TikTok | Platform::YoutubeMp4 => payload.get("video")?.as_str()?,
        Platform::YoutubeMp3 => payload.get("audio")?.as_str()?,
        Platform::YoutubeSearch => return None,
    };

    if link.is_empty() {
        None
    } else {
        Some(link.to_string())
    }
}

/// Format text and download link together
pub fn format_response(platform: Platform, body: &Value) -> FormattedResult {
    FormattedResult {
        text: format_result(platform, body),
        download_url: primary_download_link(platform, body),
    }
}

fn payload(body: &Value) -> &Value {
    body.get("data").unwrap_or(&Value::Null)
}

/// Render a scalar field for display
fn field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn is_present(value: &Value, key: &str) -> bool {
    !matches!(value.get(key), None | Some(Value::Null))
}

fn format_media_list(payload: &Value) -> String {
    let Some(items) = payload.as_array() else {
        return "No data".to_string();
    };

    items
        .iter()
        .enumerate()
        .map(|(i, media)| format!("Media {}: {}", i + 1, field(media, "url")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_fields(payload: &Value, fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(label, key)| format!("{}: {}", label, field(payload, key)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_search(payload: &Value) -> String {
    if !is_present(payload, "video") && !is_present(payload, "channel") {
        return "No data found".to_string();
    }

    let empty = Vec::new();
    let videos = payload
        .get("video")
        .and_then(Value::as_array)
        .unwrap_or(&empty);
    let channels = payload
        .get("channel")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let video_blocks = videos.iter().enumerate().map(|(i, v)| {
        format!(
            "[Video {}] Title: {}\nURL: {}\nDuration: {}\nViews: {}\nUploaded: {}",
            i + 1,
            field(v, "title"),
            field(v, "url"),
            field(v, "durationH"),
            field(v, "view"),
            field(v, "publishedTime"),
        )
    });
    let channel_blocks = channels.iter().enumerate().map(|(i, c)| {
        format!(
            "[Channel {}] Name: {}\nURL: {}\nSubscribers: {}\nVideos: {}",
            i + 1,
            field(c, "channelName"),
            field(c, "url"),
            field(c, "subscriberH"),
            field(c, "videoCount"),
        )
    });

    video_blocks
        .chain(channel_blocks)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instagram_single_media() {
        let body = json!({ "data": [{ "url": "http://x/1.jpg" }] });
        assert_eq!(
            format_result(Platform::Instagram, &body),
            "Media 1: http://x/1.jpg"
        );
    }

    #[test]
    fn test_facebook_numbers_media_from_one() {
        let body = json!({ "data": [
            { "url": "http://x/hd.mp4", "resolution": "HD" },
            { "url": "http://x/sd.mp4", "resolution": "SD" }
        ] });
        assert_eq!(
            format_result(Platform::Facebook, &body),
            "Media 1: http://x/hd.mp4\nMedia 2: http://x/sd.mp4"
        );
    }

    #[test]
    fn test_media_list_without_data() {
        assert_eq!(format_result(Platform::Instagram, &json!({})), "No data");
        assert_eq!(
            format_result(Platform::Facebook, &json!({ "data": null })),
            "No data"
        );
    }

    #[test]
    fn test_tiktok_fields() {
        let body = json!({ "data": {
            "title": "dance",
            "author": "Someone",
            "username": "someone",
            "published": "2024-01-01",
            "like": 10,
            "comment": 2,
            "share": 1,
            "views": "1.2K",
            "video": "http://x/v.mp4",
            "cover": "http://x/c.jpg",
            "music": "http://x/m.mp3",
            "profilePicture": "http://x/p.jpg",
            "extra": "ignored"
        } });

        let expected = "Title: dance\n\
            Author: Someone\n\
            Username: someone\n\
            Published: 2024-01-01\n\
            Likes: 10\n\
            Comments: 2\n\
            Shares: 1\n\
            Views: 1.2K\n\
            Video URL: http://x/v.mp4\n\
            Cover URL: http://x/c.jpg\n\
            Music URL: http://x/m.mp3\n\
            Profile Picture: http://x/p.jpg";
        assert_eq!(format_result(Platform::TikTok, &body), expected);
    }

    #[test]
    fn test_youtube_mp4_missing_fields_render_empty() {
        let body = json!({ "data": { "title": "clip", "video": "http://x/v.mp4" } });
        let expected = "Title: clip\n\
            Author: \n\
            Duration: \n\
            Views: \n\
            Video URL: http://x/v.mp4\n\
            Audio URL: \n\
            Thumbnail: \n\
            Description: ";
        assert_eq!(format_result(Platform::YoutubeMp4, &body), expected);
    }

    #[test]
    fn test_youtube_mp3_fields() {
        let body = json!({ "data": {
            "title": "song",
            "author": "band",
            "duration": "3:21",
            "views": 42,
            "audio": "http://x/a.mp3",
            "thumbnail": "http://x/t.jpg",
            "description": "live"
        } });
        let text = format_result(Platform::YoutubeMp3, &body);
        assert!(text.starts_with("Title: song\nAuthor: band\nDuration: 3:21\nViews: 42\n"));
        assert!(text.contains("Audio URL: http://x/a.mp3"));
        assert!(text.ends_with("Description: live"));
    }

    #[test]
    fn test_search_videos_then_channels() {
        let body = json!({ "data": {
            "video": [{
                "title": "Rust in 100s",
                "url": "https://youtu.be/abc",
                "durationH": "2:10",
                "view": "1M",
                "publishedTime": "1 year ago"
            }],
            "channel": [{
                "channelName": "Rustaceans",
                "url": "https://youtube.com/@rust",
                "subscriberH": "10K",
                "videoCount": 120
            }]
        } });

        let expected = "[Video 1] Title: Rust in 100s\n\
            URL: https://youtu.be/abc\n\
            Duration: 2:10\n\
            Views: 1M\n\
            Uploaded: 1 year ago\n\
            \n\
            [Channel 1] Name: Rustaceans\n\
            URL: https://youtube.com/@rust\n\
            Subscribers: 10K\n\
            Videos: 120";
        assert_eq!(format_result(Platform::YoutubeSearch, &body), expected);
    }

    #[test]
    fn test_search_without_results() {
        assert_eq!(
            format_result(Platform::YoutubeSearch, &json!({ "data": {} })),
            "No data found"
        );
        assert_eq!(
            format_result(Platform::YoutubeSearch, &json!({ "data": { "video": [] } })),
            ""
        );
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let body = json!({ "data": [{ "url": "http://x/1.jpg" }, { "url": "http://x/2.jpg" }] });
        let first = format_result(Platform::Instagram, &body);
        for _ in 0..3 {
            assert_eq!(format_result(Platform::Instagram, &body), first);
        }
    }

    #[test]
    fn test_download_link_per_platform() {
        let list = json!({ "data": [{ "url": "http://x/1.jpg" }, { "url": "http://x/2.jpg" }] });
        assert_eq!(
            primary_download_link(Platform::Instagram, &list).as_deref(),
            Some("http://x/1.jpg")
        );
        assert_eq!(
            primary_download_link(Platform::Facebook, &list).as_deref(),
            Some("http://x/1.jpg")
        );

        let video = json!({ "data": { "video": "http://x/v.mp4", "audio": "http://x/a.mp3" } });
        assert_eq!(
            primary_download_link(Platform::TikTok, &video).as_deref(),
            Some("http://x/v.mp4")
        );
        assert_eq!(
            primary_download_link(Platform::YoutubeMp4, &video).as_deref(),
            Some("http://x/v.mp4")
        );
        assert_eq!(
            primary_download_link(Platform::YoutubeMp3, &video).as_deref(),
            Some("http://x/a.mp3")
        );
        assert_eq!(primary_download_link(Platform::YoutubeSearch, &video), None);
    }

    #[test]
    fn test_download_link_absent_or_empty() {
        assert_eq!(
            primary_download_link(Platform::Instagram, &json!({ "data": [] })),
            None
        );
        assert_eq!(
            primary_download_link(Platform::YoutubeMp3, &json!({ "data": { "audio": "" } })),
            None
        );
        assert_eq!(primary_download_link(Platform::TikTok, &json!({})), None);
    }

    #[test]
    fn test_format_response_combines_text_and_link() {
        let body = json!({ "data": [{ "url": "http://x/1.jpg" }] });
        let formatted = format_response(Platform::Instagram, &body);
        assert_eq!(formatted.text, "Media 1: http://x/1.jpg");
        assert_eq!(formatted.download_url.as_deref(), Some("http://x/1.jpg"));
    }
}
