use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// Field a ranked result list is ordered by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Views per hour since publication.
    #[default]
    GrowthRate,
    /// Raw cumulative views.
    ViewCount,
    /// Likes per view.
    EngagementRatio,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::GrowthRate => write!(f, "growthRate"),
            SortKey::ViewCount => write!(f, "viewCount"),
            SortKey::EngagementRatio => write!(f, "engagementRatio"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "growthRate" | "growth-rate" | "speed" => Ok(Self::GrowthRate),
            "viewCount" | "view-count" | "views" => Ok(Self::ViewCount),
            "engagementRatio" | "engagement-ratio" | "engagement" => Ok(Self::EngagementRatio),
            _ => Err(ParseEnumError {
                kind: "sort key",
                value: s.to_string(),
                expected: "growthRate, viewCount, engagementRatio",
            }),
        }
    }
}

/// Cut-offs for the "surging" classification.
///
/// A video surges when its growth rate exceeds `min_growth_rate`, or when it
/// has more than `min_views` views and is at most `max_age_days` old.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurgeThresholds {
    /// Views per hour, exclusive.
    pub min_growth_rate: f64,
    /// Total views, exclusive.
    pub min_views: u64,
    /// Whole days since publication, inclusive.
    pub max_age_days: i64,
}

impl Default for SurgeThresholds {
    fn default() -> Self {
        Self {
            min_growth_rate: 5000.0,
            min_views: 100_000,
            max_age_days: 15,
        }
    }
}
