mod videos;

use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use viralscope_core::{AppConfig, UpstreamError};
use viralscope_youtube::YoutubeClient;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub youtube: YoutubeClient,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// HTTP status YouTube answered with, when the failure came from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    server_api_key: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                upstream_status: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    #[must_use]
    pub fn with_upstream_status(mut self, status: Option<u16>) -> Self {
        self.error.upstream_status = status;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" => StatusCode::BAD_REQUEST,
            "upstream_rejected" => StatusCode::FORBIDDEN,
            // A 4xx from YouTube is the caller's to fix, so it passes through.
            "upstream_unavailable" => self
                .error
                .upstream_status
                .filter(|s| (400..500).contains(s))
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_upstream_error(request_id: String, error: &UpstreamError) -> ApiError {
    match error {
        UpstreamError::Rejected { status, reason, .. } => {
            tracing::warn!(
                status,
                reason = reason.as_deref().unwrap_or("unknown"),
                "YouTube rejected the API key"
            );
        }
        UpstreamError::Unavailable { status, message } => {
            tracing::error!(status = ?status, message = %message, "YouTube fetch failed");
        }
    }
    ApiError::new(request_id, error.kind(), error.message()).with_upstream_status(error.status())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn search_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/videos", get(videos::search_videos))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(search_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            server_api_key: state.config.youtube_api_key.is_some(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub fn rate_limit_state(config: &AppConfig) -> RateLimitState {
    RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    )
}
