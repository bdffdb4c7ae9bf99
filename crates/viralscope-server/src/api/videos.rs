use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;
use viralscope_core::{AppConfig, ParseEnumError, SearchQuery, SearchRequest, SortKey};
use viralscope_rank::{run_search, RankedVideo};
use viralscope_youtube::YoutubeSource;

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Query string of `GET /api/v1/videos`. Every field arrives as text so a
/// bad value becomes a `bad_request` with a useful message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VideosQuery {
    pub keyword: Option<String>,
    pub api_key: Option<String>,
    /// Lookback window in days.
    pub published_after: Option<String>,
    pub order: Option<String>,
    pub video_duration: Option<String>,
    pub sort: Option<String>,
}

impl VideosQuery {
    fn to_request(&self, config: &AppConfig) -> Result<SearchRequest, String> {
        // Blank is rejected, anything else goes upstream untouched.
        let keyword = self
            .keyword
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| "keyword is required".to_string())?;

        let mut query = SearchQuery::new(keyword);
        query.max_results = config.max_results;
        query.lookback_days = match non_blank(self.published_after.as_deref()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("publishedAfter must be a whole number of days, got '{raw}'"))?,
            None => config.default_lookback_days,
        };
        if let Some(raw) = non_blank(self.order.as_deref()) {
            query.order = raw.parse().map_err(|e: ParseEnumError| e.to_string())?;
        }
        if let Some(raw) = non_blank(self.video_duration.as_deref()) {
            query.duration = raw.parse().map_err(|e: ParseEnumError| e.to_string())?;
        }

        let sort = match non_blank(self.sort.as_deref()) {
            Some(raw) => raw.parse().map_err(|e: ParseEnumError| e.to_string())?,
            None => SortKey::default(),
        };

        Ok(SearchRequest { query, sort })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The server's own key wins over whatever the caller sent.
fn resolve_api_key<'a>(server_key: Option<&'a str>, caller_key: Option<&'a str>) -> Option<&'a str> {
    non_blank(server_key).or_else(|| non_blank(caller_key))
}

pub(super) async fn search_videos(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<VideosQuery>,
) -> Result<Json<ApiResponse<Vec<RankedVideo>>>, ApiError> {
    let request = params.to_request(&state.config).map_err(|message| {
        tracing::warn!(error = %message, "invalid search request");
        ApiError::new(req_id.0.clone(), "bad_request", message)
    })?;

    let Some(api_key) = resolve_api_key(
        state.config.youtube_api_key.as_deref(),
        params.api_key.as_deref(),
    ) else {
        tracing::warn!("search rejected: no YouTube API key available");
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "a YouTube API key is required: set YOUTUBE_API_KEY or pass apiKey",
        ));
    };

    let source = YoutubeSource::new(&state.youtube, api_key);
    let data = run_search(&source, &request, Utc::now(), &state.config.surge)
        .await
        .map_err(|e| map_upstream_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
#[path = "videos_test.rs"]
mod tests;
