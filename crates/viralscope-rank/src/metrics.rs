//! Growth metrics and the "surging" classification.

use chrono::{DateTime, Utc};
use viralscope_core::SurgeThresholds;

use crate::types::{VideoMetrics, VideoRecord};

/// Derive time-normalized metrics for `record` as of `now`.
///
/// Hours are clamped to at least 1 so a video published seconds ago (or with
/// a timestamp slightly in the future) does not divide by zero. Days are not
/// clamped: a ten-minute-old video is 0 days and 1 hour old.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_metrics(
    record: &VideoRecord,
    now: DateTime<Utc>,
    thresholds: &SurgeThresholds,
) -> VideoMetrics {
    let age = now - record.published_at;
    let hours_since_published = age.num_hours().max(1);
    let days_since_published = age.num_days();

    let growth_rate = record.view_count as f64 / hours_since_published as f64;
    let engagement_ratio = record.like_count as f64 / record.view_count.max(1) as f64;

    let is_surging = is_surging(
        growth_rate,
        record.view_count,
        days_since_published,
        thresholds,
    );

    VideoMetrics {
        hours_since_published,
        days_since_published,
        growth_rate,
        engagement_ratio,
        is_surging,
    }
}

/// Fast growth alone is enough; so is high reach while still recent.
fn is_surging(
    growth_rate: f64,
    view_count: u64,
    days_since_published: i64,
    thresholds: &SurgeThresholds,
) -> bool {
    let accelerating = growth_rate > thresholds.min_growth_rate;
    let recent_high_reach =
        view_count > thresholds.min_views && days_since_published <= thresholds.max_age_days;
    accelerating || recent_high_reach
}
