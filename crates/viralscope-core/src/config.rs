use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::query::MAX_RESULTS_LIMIT;
use crate::ranking::SurgeThresholds;
use crate::ConfigError;

/// `YouTube` Data API v3 root used unless `VIRALSCOPE_YOUTUBE_BASE_URL` overrides it.
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        parse_value(var, &or_default(var, default))
    };

    let env = parse_environment(&or_default("VIRALSCOPE_ENV", "development"))?;
    let bind_addr = parse_addr("VIRALSCOPE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("VIRALSCOPE_LOG_LEVEL", "info");

    let youtube_api_key = optional("YOUTUBE_API_KEY");
    let youtube_base_url = or_default("VIRALSCOPE_YOUTUBE_BASE_URL", DEFAULT_YOUTUBE_BASE_URL);
    let request_timeout_secs: u64 = parse_value(
        "VIRALSCOPE_REQUEST_TIMEOUT_SECS",
        &or_default("VIRALSCOPE_REQUEST_TIMEOUT_SECS", "10"),
    )?;
    let user_agent = or_default("VIRALSCOPE_USER_AGENT", "viralscope/0.1 (trend-discovery)");

    let default_lookback_days: u32 = parse_value(
        "VIRALSCOPE_DEFAULT_LOOKBACK_DAYS",
        &or_default("VIRALSCOPE_DEFAULT_LOOKBACK_DAYS", "15"),
    )?;
    let max_results: u8 = parse_value(
        "VIRALSCOPE_MAX_RESULTS",
        &or_default("VIRALSCOPE_MAX_RESULTS", "50"),
    )?;
    if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
        return Err(ConfigError::InvalidEnvVar {
            var: "VIRALSCOPE_MAX_RESULTS".to_string(),
            reason: format!("must be between 1 and {MAX_RESULTS_LIMIT}"),
        });
    }

    let defaults = SurgeThresholds::default();
    let surge = SurgeThresholds {
        min_growth_rate: parse_value(
            "VIRALSCOPE_SURGE_MIN_GROWTH_RATE",
            &or_default(
                "VIRALSCOPE_SURGE_MIN_GROWTH_RATE",
                &defaults.min_growth_rate.to_string(),
            ),
        )?,
        min_views: parse_value(
            "VIRALSCOPE_SURGE_MIN_VIEWS",
            &or_default("VIRALSCOPE_SURGE_MIN_VIEWS", &defaults.min_views.to_string()),
        )?,
        max_age_days: parse_value(
            "VIRALSCOPE_SURGE_MAX_AGE_DAYS",
            &or_default(
                "VIRALSCOPE_SURGE_MAX_AGE_DAYS",
                &defaults.max_age_days.to_string(),
            ),
        )?,
    };
    if !surge.min_growth_rate.is_finite() || surge.min_growth_rate < 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VIRALSCOPE_SURGE_MIN_GROWTH_RATE".to_string(),
            reason: "must be a finite, non-negative number".to_string(),
        });
    }

    let rate_limit_max_requests: usize = parse_value(
        "VIRALSCOPE_RATE_LIMIT_MAX_REQUESTS",
        &or_default("VIRALSCOPE_RATE_LIMIT_MAX_REQUESTS", "120"),
    )?;
    let rate_limit_window_secs: u64 = parse_value(
        "VIRALSCOPE_RATE_LIMIT_WINDOW_SECS",
        &or_default("VIRALSCOPE_RATE_LIMIT_WINDOW_SECS", "60"),
    )?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        youtube_api_key,
        youtube_base_url,
        request_timeout_secs,
        user_agent,
        default_lookback_days,
        max_results,
        surge,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VIRALSCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
