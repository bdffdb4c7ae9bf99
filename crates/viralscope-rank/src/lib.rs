//! Aggregation and ranking engine: merges search hits with statistics,
//! derives growth metrics, and orders the result for display.

pub mod format;
pub mod merge;
pub mod metrics;
pub mod pipeline;
pub mod sort;
pub mod types;

pub use format::{format_age, format_count, format_speed};
pub use merge::{index_snapshots, merge_records};
pub use metrics::derive_metrics;
pub use pipeline::{rank_videos, run_search};
pub use sort::sort_videos;
pub use types::{RankedVideo, VideoMetrics, VideoRecord};
