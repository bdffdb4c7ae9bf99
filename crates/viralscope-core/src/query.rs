use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;
use crate::ranking::SortKey;

pub const DEFAULT_LOOKBACK_DAYS: u32 = 15;

/// Upper bound the search endpoint accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u8 = 50;

/// Ordering requested from the upstream search endpoint.
///
/// This only shapes which candidates come back; the final ranking is always
/// done locally by [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    Date,
    Rating,
    Relevance,
    Title,
    #[default]
    ViewCount,
}

impl SearchOrder {
    /// Value sent as the `order` query parameter.
    #[must_use]
    pub fn as_api_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
            Self::Title => "title",
            Self::ViewCount => "viewCount",
        }
    }
}

impl std::fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl FromStr for SearchOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "rating" => Ok(Self::Rating),
            "relevance" => Ok(Self::Relevance),
            "title" => Ok(Self::Title),
            "viewCount" | "view-count" | "views" => Ok(Self::ViewCount),
            _ => Err(ParseEnumError {
                kind: "search order",
                value: s.to_string(),
                expected: "date, rating, relevance, title, viewCount",
            }),
        }
    }
}

/// Upstream duration filter. `Any` means the parameter is left out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoDuration {
    #[default]
    Any,
    Short,
    Medium,
    Long,
}

impl VideoDuration {
    /// Value for the `videoDuration` parameter, or `None` when no filter applies.
    #[must_use]
    pub fn as_api_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Short => Some("short"),
            Self::Medium => Some("medium"),
            Self::Long => Some("long"),
        }
    }
}

impl std::fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_param().unwrap_or("any"))
    }
}

impl FromStr for VideoDuration {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(ParseEnumError {
                kind: "video duration",
                value: s.to_string(),
                expected: "any, short, medium, long",
            }),
        }
    }
}

/// Parameters for the upstream keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Passed through to the upstream untouched.
    pub keyword: String,
    /// Bounds `publishedAfter`; the ranking engine never reads it.
    pub lookback_days: u32,
    pub order: SearchOrder,
    pub duration: VideoDuration,
    pub max_results: u8,
}

impl SearchQuery {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            order: SearchOrder::default(),
            duration: VideoDuration::default(),
            max_results: MAX_RESULTS_LIMIT,
        }
    }

    /// Earliest publication time to request, `lookback_days` before `now`.
    #[must_use]
    pub fn published_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.lookback_days))
    }

    /// `max_results` clamped into the range the search endpoint accepts.
    #[must_use]
    pub fn effective_max_results(&self) -> u8 {
        self.max_results.clamp(1, MAX_RESULTS_LIMIT)
    }
}

/// One search request: what to fetch and how to rank it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub sort: SortKey,
}
