//! Client for the `YouTube` Data API v3 `search` and `videos` endpoints.

pub mod client;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use normalize::{normalize_search_item, normalize_video_item};
pub use source::YoutubeSource;
