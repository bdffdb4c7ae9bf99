//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API-specific error handling and typed response
//! deserialization. The API key is passed per call and never stored, so one
//! client can serve requests made with different keys.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use viralscope_core::{CandidateItem, MetricSnapshot, SearchQuery};

use crate::error::YoutubeError;
use crate::normalize::{normalize_search_item, normalize_video_item};
use crate::types::{ErrorEnvelope, SearchListResponse, VideoListResponse};

/// `videos.list` accepts at most this many ids per call.
const MAX_IDS_PER_VIDEOS_CALL: usize = 50;

/// Client for the `YouTube` Data API.
///
/// The base URL comes from configuration, so production and mock-server
/// tests build it the same way.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    client: Client,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a client rooted at `base_url`, e.g. `https://www.googleapis.com/youtube/v3`.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends the endpoint to the
        // version path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Searches for videos matching `query`, published after `published_after`.
    ///
    /// Calls `search.list` with `part=snippet&type=video`. Hits that are not
    /// videos are skipped. The result keeps the upstream order.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] on a non-2xx response.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_videos(
        &self,
        api_key: &str,
        query: &SearchQuery,
        published_after: DateTime<Utc>,
    ) -> Result<Vec<CandidateItem>, YoutubeError> {
        let published_after = published_after.to_rfc3339_opts(SecondsFormat::Millis, true);
        let max_results = query.effective_max_results().to_string();

        let mut params = vec![
            ("part", "snippet"),
            ("q", query.keyword.as_str()),
            ("type", "video"),
            ("order", query.order.as_api_str()),
            ("publishedAfter", published_after.as_str()),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(duration) = query.duration.as_api_param() {
            params.push(("videoDuration", duration));
        }

        let url = self.build_url("search", api_key, &params)?;
        let response: SearchListResponse = self.request_json(&url, "search").await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(normalize_search_item)
            .collect())
    }

    /// Fetches statistics snapshots for the given video ids.
    ///
    /// Calls `videos.list` with `part=statistics,snippet`, batching ids in
    /// groups of 50. Ids the API does not return (deleted or private videos)
    /// are simply absent from the result. An empty `ids` makes no request.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] on a non-2xx response.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the body does not match the expected shape.
    pub async fn video_statistics(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<MetricSnapshot>, YoutubeError> {
        let mut snapshots = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_IDS_PER_VIDEOS_CALL) {
            let joined = chunk.join(",");
            let url = self.build_url(
                "videos",
                api_key,
                &[("part", "statistics,snippet"), ("id", joined.as_str())],
            )?;
            let response: VideoListResponse = self.request_json(&url, "videos").await?;
            snapshots.extend(response.items.into_iter().map(normalize_video_item));
        }

        Ok(snapshots)
    }

    /// Builds the endpoint URL with percent-encoded query parameters, the
    /// API key last.
    fn build_url(
        &self,
        endpoint: &str,
        api_key: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| YoutubeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and decodes a 2xx body as `T`.
    ///
    /// Errors never carry the request URL, since it contains the API key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        endpoint: &str,
    ) -> Result<T, YoutubeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| YoutubeError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| YoutubeError::Http(e.without_url()))?;

        if !status.is_success() {
            let err = Self::api_error(status.as_u16(), &body);
            tracing::warn!(endpoint, status = status.as_u16(), error = %err, "YouTube API request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: endpoint.to_string(),
            source: e,
        })
    }

    /// Builds [`YoutubeError::Api`] from a non-2xx body, reading the error
    /// envelope when the body has one.
    fn api_error(status: u16, body: &str) -> YoutubeError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => YoutubeError::Api {
                status,
                reason: envelope.error.primary_reason().map(str::to_string),
                message: envelope.error.message,
            },
            Err(_) => YoutubeError::Api {
                status,
                reason: None,
                message: None,
            },
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
