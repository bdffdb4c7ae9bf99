//! The `search` command: run one keyword search and render the ranking.

use chrono::Utc;
use clap::Args;
use viralscope_core::{
    AppConfig, SearchOrder, SearchQuery, SearchRequest, SortKey, VideoDuration,
};
use viralscope_rank::{run_search, RankedVideo};
use viralscope_youtube::{YoutubeClient, YoutubeSource};

const TITLE_WIDTH: usize = 50;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword to search for, passed to YouTube as-is
    pub keyword: String,
    /// Only consider videos published in the last N days
    #[arg(long)]
    pub days: Option<u32>,
    /// Upstream search ordering (date, rating, relevance, title, viewCount)
    #[arg(long, default_value_t = SearchOrder::ViewCount)]
    pub order: SearchOrder,
    /// Duration filter (any, short, medium, long)
    #[arg(long, default_value_t = VideoDuration::Any)]
    pub duration: VideoDuration,
    /// Ranking key (growthRate, viewCount, engagementRatio)
    #[arg(long, default_value_t = SortKey::GrowthRate)]
    pub sort: SortKey,
    /// Number of search results to request (1-50)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=50))]
    pub limit: Option<u8>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl SearchArgs {
    fn to_request(&self, config: &AppConfig) -> anyhow::Result<SearchRequest> {
        if self.keyword.trim().is_empty() {
            anyhow::bail!("keyword must not be blank");
        }

        let mut query = SearchQuery::new(self.keyword.as_str());
        query.lookback_days = self.days.unwrap_or(config.default_lookback_days);
        query.order = self.order;
        query.duration = self.duration;
        query.max_results = self.limit.unwrap_or(config.max_results);

        Ok(SearchRequest {
            query,
            sort: self.sort,
        })
    }
}

/// Runs the search and returns the rendered output.
///
/// # Errors
///
/// Returns an error if no API key is available, the keyword is blank, the
/// client cannot be built, or either upstream fetch fails.
pub(crate) async fn run_search_command(
    args: &SearchArgs,
    config: &AppConfig,
) -> anyhow::Result<String> {
    let api_key = non_blank(args.api_key.as_deref())
        .or_else(|| non_blank(config.youtube_api_key.as_deref()))
        .ok_or_else(|| anyhow::anyhow!("no API key: pass --api-key or set YOUTUBE_API_KEY"))?;
    let request = args.to_request(config)?;

    let client = YoutubeClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.youtube_base_url,
    )?;
    let source = YoutubeSource::new(&client, api_key);

    let videos = run_search(&source, &request, Utc::now(), &config.surge)
        .await
        .map_err(|e| anyhow::anyhow!("search for '{}' failed: {e}", request.query.keyword))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&videos)?)
    } else {
        Ok(render_table(&videos))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Plain-text table, one row per video in ranked order.
fn render_table(videos: &[RankedVideo]) -> String {
    if videos.is_empty() {
        return "no videos found; try a wider --days window".to_string();
    }

    let mut out = format!(
        "{:<5}{:<18}{:<9}{:<9}{:<15}{:<7}TITLE\n",
        "#", "SPEED", "VIEWS", "LIKES", "AGE", "SURGE"
    );
    for (rank, video) in videos.iter().enumerate() {
        let title = if video.record.title.chars().count() > TITLE_WIDTH {
            format!(
                "{}...",
                video.record.title.chars().take(TITLE_WIDTH).collect::<String>()
            )
        } else {
            video.record.title.clone()
        };
        let surge = if video.metrics.is_surging { "yes" } else { "" };
        out.push_str(&format!(
            "{:<5}{:<18}{:<9}{:<9}{:<15}{:<7}{} ({})\n",
            rank + 1,
            video.speed_display,
            video.views_display,
            video.likes_display,
            video.age_display,
            surge,
            title,
            video.record.channel
        ));
    }
    out.pop();
    out
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
