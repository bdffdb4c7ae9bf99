use chrono::Utc;
use viralscope_core::{CandidateItem, MetricSnapshot, SearchQuery, UpstreamError, VideoSource};

use crate::client::YoutubeClient;

/// A [`YoutubeClient`] bound to one request's API key.
///
/// Lives only for the duration of a search, so the key is never held
/// beyond the request that supplied it.
#[derive(Debug, Clone, Copy)]
pub struct YoutubeSource<'a> {
    client: &'a YoutubeClient,
    api_key: &'a str,
}

impl<'a> YoutubeSource<'a> {
    #[must_use]
    pub fn new(client: &'a YoutubeClient, api_key: &'a str) -> Self {
        Self { client, api_key }
    }
}

impl VideoSource for YoutubeSource<'_> {
    async fn fetch_candidates(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<CandidateItem>, UpstreamError> {
        let published_after = query.published_after(Utc::now());
        let candidates = self
            .client
            .search_videos(self.api_key, query, published_after)
            .await?;
        tracing::debug!(count = candidates.len(), "search candidates fetched");
        Ok(candidates)
    }

    async fn fetch_snapshots(&self, ids: &[String]) -> Result<Vec<MetricSnapshot>, UpstreamError> {
        let snapshots = self.client.video_statistics(self.api_key, ids).await?;
        tracing::debug!(
            requested = ids.len(),
            returned = snapshots.len(),
            "statistics fetched"
        );
        Ok(snapshots)
    }
}
