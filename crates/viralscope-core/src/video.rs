use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video surfaced by a keyword search, before its statistics are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
}

/// A point-in-time read of a video's cumulative counters.
///
/// Counters the upstream hides or omits are `None` and count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub id: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
}

impl MetricSnapshot {
    #[must_use]
    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    #[must_use]
    pub fn likes(&self) -> u64 {
        self.like_count.unwrap_or(0)
    }
}
