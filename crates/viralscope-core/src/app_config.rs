use std::net::SocketAddr;

use crate::ranking::SurgeThresholds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Server-side key; takes precedence over any key a caller supplies.
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_lookback_days: u32,
    pub max_results: u8,
    pub surge: SurgeThresholds,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("youtube_base_url", &self.youtube_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_lookback_days", &self.default_lookback_days)
            .field("max_results", &self.max_results)
            .field("surge", &self.surge)
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .finish()
    }
}
