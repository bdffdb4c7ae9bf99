//! Shared domain types, configuration, and the upstream fetch seam.

pub mod app_config;
pub mod config;
pub mod error;
pub mod query;
pub mod ranking;
pub mod source;
pub mod video;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_YOUTUBE_BASE_URL};
pub use error::{ConfigError, ParseEnumError, UpstreamError};
pub use query::{SearchOrder, SearchQuery, SearchRequest, VideoDuration};
pub use ranking::{SortKey, SurgeThresholds};
pub use source::VideoSource;
pub use video::{CandidateItem, MetricSnapshot};
