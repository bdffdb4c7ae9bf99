//! Joins search hits with their statistics snapshots.

use std::collections::HashMap;

use viralscope_core::{CandidateItem, MetricSnapshot};

use crate::types::VideoRecord;

/// Index snapshots by video id. A repeated id keeps the last snapshot seen.
#[must_use]
pub fn index_snapshots(snapshots: Vec<MetricSnapshot>) -> HashMap<String, MetricSnapshot> {
    snapshots.into_iter().map(|s| (s.id.clone(), s)).collect()
}

/// Produce one [`VideoRecord`] per candidate that has a snapshot, in candidate
/// order.
///
/// Candidates without a snapshot are dropped without error. Repeated
/// candidate ids are not collapsed; each one is joined on its own.
#[must_use]
pub fn merge_records(
    candidates: Vec<CandidateItem>,
    snapshots: &HashMap<String, MetricSnapshot>,
) -> Vec<VideoRecord> {
    let candidate_count = candidates.len();
    let records: Vec<VideoRecord> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let snapshot = snapshots.get(&candidate.id)?;
            Some(VideoRecord {
                view_count: snapshot.views(),
                like_count: snapshot.likes(),
                id: candidate.id,
                title: candidate.title,
                channel: candidate.channel_name,
                published_at: candidate.published_at,
                thumbnail_url: candidate.thumbnail_url,
            })
        })
        .collect();

    let dropped = candidate_count - records.len();
    if dropped > 0 {
        tracing::debug!(dropped, "candidates without statistics excluded from merge");
    }

    records
}
