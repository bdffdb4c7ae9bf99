//! `YouTube` Data API v3 response types.
//!
//! Only the fields the ranking pipeline needs are modelled; everything else
//! in the payload is ignored. Most fields are optional because the API omits
//! them freely (hidden like counts, deleted videos, channel results).

use chrono::{DateTime, Utc};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// search.list
// ---------------------------------------------------------------------------

/// Response of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    #[serde(default)]
    pub snippet: Option<SearchSnippet>,
}

/// Resource id of a search hit. `video_id` is absent for channel and
/// playlist results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

// ---------------------------------------------------------------------------
// videos.list
// ---------------------------------------------------------------------------

/// Response of `GET /videos`.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

/// Counters are serialized as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
}

// ---------------------------------------------------------------------------
// error envelope
// ---------------------------------------------------------------------------

/// Body of a non-2xx response: `{ "error": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

/// Entry of either `errors[]` (legacy) or `details[]` (`google.rpc.ErrorInfo`).
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First machine-readable reason found, preferring the top-level field,
    /// then `details[]`, then `errors[]`.
    #[must_use]
    pub fn primary_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .or_else(|| self.details.iter().find_map(|d| d.reason.as_deref()))
            .or_else(|| self.errors.iter().find_map(|e| e.reason.as_deref()))
    }
}
