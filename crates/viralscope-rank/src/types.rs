use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{format_age, format_count, format_speed};

/// A search hit joined with its statistics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
    pub view_count: u64,
    pub like_count: u64,
}

/// Time-normalized figures derived from a [`VideoRecord`] at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoMetrics {
    /// Whole hours since publication, never below 1.
    pub hours_since_published: i64,
    /// Whole days since publication, not clamped.
    pub days_since_published: i64,
    /// Views per hour.
    pub growth_rate: f64,
    /// Likes per view.
    pub engagement_ratio: f64,
    pub is_surging: bool,
}

/// Display-ready output of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVideo {
    #[serde(flatten)]
    pub record: VideoRecord,
    #[serde(flatten)]
    pub metrics: VideoMetrics,
    pub views_display: String,
    pub likes_display: String,
    pub speed_display: String,
    pub age_display: String,
}

impl RankedVideo {
    #[must_use]
    pub fn new(record: VideoRecord, metrics: VideoMetrics) -> Self {
        Self {
            views_display: format_count(record.view_count),
            likes_display: format_count(record.like_count),
            speed_display: format_speed(metrics.growth_rate),
            age_display: format_age(metrics.days_since_published, metrics.hours_since_published),
            record,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RankedVideo {
        let record = VideoRecord {
            id: "v1".to_string(),
            title: "I Built a Secret Room".to_string(),
            channel: "Creator X".to_string(),
            published_at: DateTime::parse_from_rfc3339("2026-10-12T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            thumbnail_url: Some("https://i.ytimg.com/vi/v1/hqdefault.jpg".to_string()),
            view_count: 2_450_120,
            like_count: 150_000,
        };
        let metrics = VideoMetrics {
            hours_since_published: 48,
            days_since_published: 2,
            growth_rate: 51_044.166,
            engagement_ratio: 0.061,
            is_surging: true,
        };
        RankedVideo::new(record, metrics)
    }

    #[test]
    fn new_fills_display_fields() {
        let video = sample();
        assert_eq!(video.views_display, "2.5M");
        assert_eq!(video.likes_display, "150.0K");
        assert_eq!(video.speed_display, "51.0K views/hr");
        assert_eq!(video.age_display, "2 days ago");
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let json = serde_json::to_value(sample()).expect("serialize RankedVideo");
        assert_eq!(json["id"], "v1");
        assert_eq!(json["view_count"], 2_450_120);
        assert_eq!(json["is_surging"], true);
        assert_eq!(json["hours_since_published"], 48);
        assert_eq!(json["views_display"], "2.5M");
        assert!(json.get("record").is_none());
        assert!(json.get("metrics").is_none());
    }
}
