use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A string did not name any variant of one of the query enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Guidance shown when the key is valid but the Data API is not enabled for it.
pub const SERVICE_NOT_ENABLED_MESSAGE: &str = "YouTube Data API v3 has not been enabled for this API key in Google Cloud Console. Please enable it to proceed.";

/// Failure of the external fetch collaborator.
///
/// Every variant is fatal to the current search: no partial data is returned.
/// An empty candidate list is not an error and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Network failure, timeout, non-2xx status, or an unusable body.
    #[error("{message}")]
    Unavailable {
        status: Option<u16>,
        message: String,
    },

    /// The upstream refused the request because the credential is not set up
    /// for the capability (API disabled or blocked for this key).
    #[error("{message}")]
    Rejected {
        status: u16,
        reason: Option<String>,
        message: String,
    },
}

impl UpstreamError {
    /// Machine-usable classifier for callers deciding how to render the failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "upstream_unavailable",
            Self::Rejected { .. } => "upstream_rejected",
        }
    }

    /// HTTP status reported by the upstream, if any response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unavailable { status, .. } => *status,
            Self::Rejected { status, .. } => Some(*status),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { message, .. } | Self::Rejected { message, .. } => message,
        }
    }
}
