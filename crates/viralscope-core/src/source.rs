use std::future::Future;

use crate::error::UpstreamError;
use crate::query::SearchQuery;
use crate::video::{CandidateItem, MetricSnapshot};

/// The two upstream lookups a search depends on.
///
/// Implementations carry whatever credential the request needs; the ranking
/// engine never sees it. The statistics lookup takes ids extracted from the
/// candidate list, so callers must run the two calls in order.
pub trait VideoSource {
    /// Keyword search, in upstream order.
    fn fetch_candidates(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<CandidateItem>, UpstreamError>> + Send;

    /// Per-video counters for the given ids, in any order.
    fn fetch_snapshots(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<MetricSnapshot>, UpstreamError>> + Send;
}
