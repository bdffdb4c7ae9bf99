use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VIRALSCOPE_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.youtube_api_key.is_none());
    assert_eq!(cfg.youtube_base_url, DEFAULT_YOUTUBE_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "viralscope/0.1 (trend-discovery)");
    assert_eq!(cfg.default_lookback_days, 15);
    assert_eq!(cfg.max_results, 50);
    assert_eq!(cfg.surge, SurgeThresholds::default());
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIRALSCOPE_BIND_ADDR"),
        "expected InvalidEnvVar(VIRALSCOPE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn youtube_api_key_is_read_when_present() {
    let mut map = HashMap::new();
    map.insert("YOUTUBE_API_KEY", "AIza-test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.youtube_api_key.as_deref(), Some("AIza-test"));
}

#[test]
fn blank_youtube_api_key_is_treated_as_missing() {
    let mut map = HashMap::new();
    map.insert("YOUTUBE_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.youtube_api_key.is_none());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("YOUTUBE_API_KEY", "AIza-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("AIza-secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIRALSCOPE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(VIRALSCOPE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_results_out_of_range_fails() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_MAX_RESULTS", "51");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIRALSCOPE_MAX_RESULTS"),
        "expected InvalidEnvVar(VIRALSCOPE_MAX_RESULTS), got: {result:?}"
    );
}

#[test]
fn surge_thresholds_override() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_SURGE_MIN_GROWTH_RATE", "2500.5");
    map.insert("VIRALSCOPE_SURGE_MIN_VIEWS", "50000");
    map.insert("VIRALSCOPE_SURGE_MAX_AGE_DAYS", "7");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.surge.min_growth_rate - 2500.5).abs() < f64::EPSILON);
    assert_eq!(cfg.surge.min_views, 50_000);
    assert_eq!(cfg.surge.max_age_days, 7);
}

#[test]
fn surge_min_growth_rate_rejects_negative() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_SURGE_MIN_GROWTH_RATE", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIRALSCOPE_SURGE_MIN_GROWTH_RATE"),
        "expected InvalidEnvVar(VIRALSCOPE_SURGE_MIN_GROWTH_RATE), got: {result:?}"
    );
}

#[test]
fn surge_min_views_invalid() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_SURGE_MIN_VIEWS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIRALSCOPE_SURGE_MIN_VIEWS"),
        "expected InvalidEnvVar(VIRALSCOPE_SURGE_MIN_VIEWS), got: {result:?}"
    );
}

#[test]
fn rate_limit_override() {
    let mut map = HashMap::new();
    map.insert("VIRALSCOPE_RATE_LIMIT_MAX_REQUESTS", "10");
    map.insert("VIRALSCOPE_RATE_LIMIT_WINDOW_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_max_requests, 10);
    assert_eq!(cfg.rate_limit_window_secs, 5);
}
