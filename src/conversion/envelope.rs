//! Upstream result to response envelope conversion
//!
//! Every downloader route answers with `{ "data": ... }`. Media-list
//! platforms already nest their items under `data` upstream, so that inner
//! value is lifted instead of being wrapped twice.

use crate::models::platform::Platform;
use crate::models::response::ApiEnvelope;
use serde_json::Value;

/// Wrap an upstream result in the uniform response envelope
pub fn wrap_upstream(platform: Platform, upstream: Value) -> ApiEnvelope {
    match upstream {
        Value::Object(mut map) if platform.is_media_list() => match map.remove("data") {
            Some(data) => ApiEnvelope { data },
            None => ApiEnvelope {
                data: Value::Object(map),
            },
        },
        other => ApiEnvelope { data: other },
    }
}
