//! Conversion of `YouTube` API types into the core domain types.

use viralscope_core::{CandidateItem, MetricSnapshot};

use crate::types::{SearchItem, Thumbnails, VideoItem};

/// Converts a search hit into a [`CandidateItem`].
///
/// Returns `None` for hits that are not videos or carry no snippet.
#[must_use]
pub fn normalize_search_item(item: SearchItem) -> Option<CandidateItem> {
    let Some(id) = item.id.video_id.filter(|id| !id.is_empty()) else {
        tracing::debug!(kind = ?item.id.kind, "skipping search hit without video id");
        return None;
    };
    let Some(snippet) = item.snippet else {
        tracing::debug!(video_id = %id, "skipping search hit without snippet");
        return None;
    };

    Some(CandidateItem {
        id,
        title: decode_html(&snippet.title),
        channel_name: decode_html(&snippet.channel_title),
        published_at: snippet.published_at,
        thumbnail_url: pick_thumbnail(snippet.thumbnails),
    })
}

/// Converts a `videos.list` entry into a [`MetricSnapshot`].
///
/// Counters that are missing or not a valid non-negative integer become `None`.
#[must_use]
pub fn normalize_video_item(item: VideoItem) -> MetricSnapshot {
    let stats = item.statistics.unwrap_or_default();
    MetricSnapshot {
        view_count: stats.view_count.as_deref().and_then(parse_count),
        like_count: stats.like_count.as_deref().and_then(parse_count),
        id: item.id,
    }
}

/// Parses a decimal counter string such as `"2450120"`.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u64> {
    let parsed = raw.trim().parse::<u64>().ok();
    if parsed.is_none() {
        tracing::debug!(raw, "unparseable counter treated as absent");
    }
    parsed
}

/// High resolution first, then the default size.
fn pick_thumbnail(thumbnails: Thumbnails) -> Option<String> {
    thumbnails
        .high
        .or(thumbnails.default)
        .or(thumbnails.medium)
        .map(|t| t.url)
}

/// Search snippets HTML-escape their text fields.
fn decode_html(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
