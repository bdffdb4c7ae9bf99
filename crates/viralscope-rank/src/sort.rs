use std::cmp::Ordering;

use viralscope_core::SortKey;

use crate::types::RankedVideo;

/// Sort `videos` in descending order of `key`.
///
/// The sort is stable: videos with equal keys keep their relative order.
pub fn sort_videos(videos: &mut [RankedVideo], key: SortKey) {
    videos.sort_by(|a, b| compare_desc(a, b, key));
}

fn compare_desc(a: &RankedVideo, b: &RankedVideo, key: SortKey) -> Ordering {
    match key {
        SortKey::GrowthRate => b.metrics.growth_rate.total_cmp(&a.metrics.growth_rate),
        SortKey::ViewCount => b.record.view_count.cmp(&a.record.view_count),
        SortKey::EngagementRatio => b
            .metrics
            .engagement_ratio
            .total_cmp(&a.metrics.engagement_ratio),
    }
}
