use thiserror::Error;
use viralscope_core::error::SERVICE_NOT_ENABLED_MESSAGE;
use viralscope_core::UpstreamError;

/// Reasons the API uses when the key exists but the Data API is off for it.
const SERVICE_NOT_ENABLED_REASONS: &[&str] = &[
    "API_KEY_SERVICE_BLOCKED",
    "accessNotConfigured",
    "SERVICE_DISABLED",
];

const GENERIC_FAILURE_MESSAGE: &str = "failed to fetch YouTube data";

/// Errors returned by the `YouTube` API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network, timeout, or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    ///
    /// `message` and `reason` come from the JSON error envelope when the body
    /// has one.
    #[error("YouTube API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        reason: Option<String>,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl YoutubeError {
    /// Whether the API refused the key because the Data API is not enabled or
    /// has been blocked for it.
    #[must_use]
    pub fn is_service_not_enabled(&self) -> bool {
        match self {
            Self::Api {
                reason, message, ..
            } => service_not_enabled(reason.as_deref(), message.as_deref()),
            _ => false,
        }
    }
}

fn service_not_enabled(reason: Option<&str>, message: Option<&str>) -> bool {
    reason.is_some_and(|r| SERVICE_NOT_ENABLED_REASONS.contains(&r))
        || message.is_some_and(|m| m.contains("blocked"))
}

impl From<YoutubeError> for UpstreamError {
    fn from(err: YoutubeError) -> Self {
        match err {
            YoutubeError::Api {
                status,
                reason,
                message,
            } => {
                if service_not_enabled(reason.as_deref(), message.as_deref()) {
                    UpstreamError::Rejected {
                        status,
                        reason,
                        message: SERVICE_NOT_ENABLED_MESSAGE.to_string(),
                    }
                } else {
                    UpstreamError::Unavailable {
                        status: Some(status),
                        message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                    }
                }
            }
            YoutubeError::Http(e) => UpstreamError::Unavailable {
                status: e.status().map(|s| s.as_u16()),
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
            YoutubeError::Deserialize { .. } | YoutubeError::InvalidBaseUrl { .. } => {
                UpstreamError::Unavailable {
                    status: None,
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, reason: Option<&str>, message: Option<&str>) -> YoutubeError {
        YoutubeError::Api {
            status,
            reason: reason.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn service_blocked_reason_maps_to_rejected() {
        let upstream: UpstreamError =
            api_error(403, Some("API_KEY_SERVICE_BLOCKED"), Some("Requests are denied")).into();
        assert_eq!(upstream.kind(), "upstream_rejected");
        assert_eq!(upstream.status(), Some(403));
        assert_eq!(upstream.message(), SERVICE_NOT_ENABLED_MESSAGE);
    }

    #[test]
    fn access_not_configured_maps_to_rejected() {
        let upstream: UpstreamError = api_error(403, Some("accessNotConfigured"), None).into();
        assert_eq!(upstream.kind(), "upstream_rejected");
    }

    #[test]
    fn blocked_in_message_maps_to_rejected() {
        let upstream: UpstreamError = api_error(
            403,
            None,
            Some("Requests to this API youtube method are blocked."),
        )
        .into();
        assert_eq!(upstream.kind(), "upstream_rejected");
    }

    #[test]
    fn other_api_errors_keep_upstream_message() {
        let upstream: UpstreamError = api_error(
            403,
            Some("quotaExceeded"),
            Some("The request cannot be completed because you have exceeded your quota."),
        )
        .into();
        assert_eq!(upstream.kind(), "upstream_unavailable");
        assert_eq!(upstream.status(), Some(403));
        assert!(upstream.message().contains("exceeded your quota"));
    }

    #[test]
    fn api_error_without_message_uses_generic_text() {
        let upstream: UpstreamError = api_error(500, None, None).into();
        assert_eq!(upstream.message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(upstream.status(), Some(500));
    }

    #[test]
    fn invalid_base_url_is_unavailable() {
        let upstream: UpstreamError = YoutubeError::InvalidBaseUrl {
            url: "::".to_string(),
            reason: "relative URL without a base".to_string(),
        }
        .into();
        assert_eq!(upstream.kind(), "upstream_unavailable");
        assert_eq!(upstream.status(), None);
    }
}
