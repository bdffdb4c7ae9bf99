//! One search request end to end: fetch, merge, derive, sort.

use chrono::{DateTime, Utc};
use viralscope_core::{
    CandidateItem, MetricSnapshot, SearchRequest, SortKey, SurgeThresholds, UpstreamError,
    VideoSource,
};

use crate::merge::{index_snapshots, merge_records};
use crate::metrics::derive_metrics;
use crate::sort::sort_videos;
use crate::types::RankedVideo;

/// Merge candidates with snapshots, derive metrics as of `now`, and sort by `sort`.
#[must_use]
pub fn rank_videos(
    candidates: Vec<CandidateItem>,
    snapshots: Vec<MetricSnapshot>,
    now: DateTime<Utc>,
    thresholds: &SurgeThresholds,
    sort: SortKey,
) -> Vec<RankedVideo> {
    let index = index_snapshots(snapshots);
    let mut videos: Vec<RankedVideo> = merge_records(candidates, &index)
        .into_iter()
        .map(|record| {
            let metrics = derive_metrics(&record, now, thresholds);
            RankedVideo::new(record, metrics)
        })
        .collect();
    sort_videos(&mut videos, sort);
    videos
}

/// Run a full search against `source`.
///
/// The statistics lookup is skipped when the search returns nothing; an empty
/// list is a valid outcome. Either upstream failure aborts the request.
///
/// # Errors
///
/// Returns the [`UpstreamError`] of whichever fetch failed first.
pub async fn run_search<S>(
    source: &S,
    request: &SearchRequest,
    now: DateTime<Utc>,
    thresholds: &SurgeThresholds,
) -> Result<Vec<RankedVideo>, UpstreamError>
where
    S: VideoSource + Sync,
{
    let candidates = source.fetch_candidates(&request.query).await?;
    if candidates.is_empty() {
        tracing::info!(keyword = %request.query.keyword, "search returned no candidates");
        return Ok(Vec::new());
    }

    let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
    let snapshots = source.fetch_snapshots(&ids).await?;

    let videos = rank_videos(candidates, snapshots, now, thresholds, request.sort);
    tracing::info!(
        keyword = %request.query.keyword,
        sort = %request.sort,
        results = videos.len(),
        surging = videos.iter().filter(|v| v.metrics.is_surging).count(),
        "search ranked"
    );
    Ok(videos)
}
