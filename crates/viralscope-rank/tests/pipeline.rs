//! `run_search` against an in-memory `VideoSource`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use viralscope_core::{
    CandidateItem, MetricSnapshot, SearchQuery, SearchRequest, SortKey, SurgeThresholds,
    UpstreamError, VideoSource,
};
use viralscope_rank::run_search;

struct FakeSource {
    candidates: Result<Vec<CandidateItem>, UpstreamError>,
    snapshots: Result<Vec<MetricSnapshot>, UpstreamError>,
    snapshot_calls: AtomicUsize,
    requested_ids: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new(
        candidates: Result<Vec<CandidateItem>, UpstreamError>,
        snapshots: Result<Vec<MetricSnapshot>, UpstreamError>,
    ) -> Self {
        Self {
            candidates,
            snapshots,
            snapshot_calls: AtomicUsize::new(0),
            requested_ids: Mutex::new(Vec::new()),
        }
    }
}

impl VideoSource for FakeSource {
    async fn fetch_candidates(
        &self,
        _query: &SearchQuery,
    ) -> Result<Vec<CandidateItem>, UpstreamError> {
        self.candidates.clone()
    }

    async fn fetch_snapshots(&self, ids: &[String]) -> Result<Vec<MetricSnapshot>, UpstreamError> {
        self.snapshot_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids
            .lock()
            .expect("ids lock")
            .extend(ids.iter().cloned());
        self.snapshots.clone()
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-14T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn candidate(id: &str, age: Duration) -> CandidateItem {
    CandidateItem {
        id: id.to_string(),
        title: format!("title {id}"),
        channel_name: "channel".to_string(),
        published_at: now() - age,
        thumbnail_url: None,
    }
}

fn request(sort: SortKey) -> SearchRequest {
    SearchRequest {
        query: SearchQuery::new("cats"),
        sort,
    }
}

#[tokio::test]
async fn ranks_merged_results() {
    let source = FakeSource::new(
        Ok(vec![
            candidate("a", Duration::hours(5)),
            candidate("b", Duration::hours(2)),
        ]),
        Ok(vec![MetricSnapshot {
            id: "b".to_string(),
            view_count: Some(12_000),
            like_count: Some(100),
        }]),
    );

    let videos = run_search(
        &source,
        &request(SortKey::GrowthRate),
        now(),
        &SurgeThresholds::default(),
    )
    .await
    .expect("search should succeed");

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].record.id, "b");
    assert!(videos[0].metrics.is_surging);
    assert_eq!(
        *source.requested_ids.lock().unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[tokio::test]
async fn empty_search_skips_statistics_lookup() {
    let source = FakeSource::new(Ok(Vec::new()), Ok(Vec::new()));

    let videos = run_search(
        &source,
        &request(SortKey::ViewCount),
        now(),
        &SurgeThresholds::default(),
    )
    .await
    .expect("empty result is not an error");

    assert!(videos.is_empty());
    assert_eq!(source.snapshot_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_failure_aborts_before_statistics() {
    let source = FakeSource::new(
        Err(UpstreamError::Unavailable {
            status: None,
            message: "connection refused".to_string(),
        }),
        Ok(Vec::new()),
    );

    let err = run_search(
        &source,
        &request(SortKey::GrowthRate),
        now(),
        &SurgeThresholds::default(),
    )
    .await
    .expect_err("search failure must propagate");

    assert_eq!(err.kind(), "upstream_unavailable");
    assert_eq!(source.snapshot_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn statistics_failure_returns_no_partial_results() {
    let source = FakeSource::new(
        Ok(vec![candidate("a", Duration::hours(1))]),
        Err(UpstreamError::Rejected {
            status: 403,
            reason: Some("API_KEY_SERVICE_BLOCKED".to_string()),
            message: "blocked".to_string(),
        }),
    );

    let err = run_search(
        &source,
        &request(SortKey::GrowthRate),
        now(),
        &SurgeThresholds::default(),
    )
    .await
    .expect_err("statistics failure must propagate");

    assert_eq!(err.kind(), "upstream_rejected");
    assert_eq!(err.status(), Some(403));
}
