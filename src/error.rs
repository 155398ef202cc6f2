use thiserror::Error;

/// Crate-wide error type.
///
/// Every failure in this core is a recoverable, reportable value; nothing
/// here is fatal to the process. Domain services propagate these unchanged
/// to callers, which decide between stale data, an empty state or an error
/// message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request URL: {url}")]
    InvalidUrl { url: String },

    #[error("Invalid response from server (URL: {url})")]
    InvalidResponse { url: String },

    #[error("HTTP error {status} (URL: {url})")]
    Http { status: u16, url: String },

    #[error("Failed to decode response: {message} (URL: {url})")]
    Decoding { message: String, url: String },

    #[error("Network error while fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Network timeout while fetching {url}")]
    NetworkTimeout { url: String },

    #[error("Rate limit exceeded for {provider}. Please try again in a minute.")]
    RateLimitExceeded { provider: String },

    #[error("Daily request quota exhausted for {provider}. Data will refresh tomorrow.")]
    DailyLimitExceeded { provider: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Create an invalid response error (response present but unusable)
    pub fn invalid_response(url: impl Into<String>) -> Self {
        Self::InvalidResponse { url: url.into() }
    }

    /// Create an HTTP status error (non-2xx, not 429)
    pub fn http_error(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    /// Create a decoding error with context
    pub fn decoding_error(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Decoding {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network error with context
    pub fn network_error(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a rate limit error for a provider
    pub fn rate_limit_exceeded(provider: impl Into<String>) -> Self {
        Self::RateLimitExceeded {
            provider: provider.into(),
        }
    }

    /// Create a daily quota error for a provider
    pub fn daily_limit_exceeded(provider: impl Into<String>) -> Self {
        Self::DailyLimitExceeded {
            provider: provider.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Classify a transport-level reqwest failure into the taxonomy
    pub fn from_transport(url: &str, e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::network_timeout(url)
        } else {
            Self::network_error(url, e.to_string())
        }
    }

    /// Check if the error is a quota signal (per-minute or daily)
    pub fn is_quota(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimitExceeded { .. } | ApiError::DailyLimitExceeded { .. }
        )
    }

    /// Check if a caller could reasonably retry later (network issues,
    /// server errors, per-minute rate limits). Daily exhaustion is not
    /// retryable until the provider day rolls over.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network { .. }
            | ApiError::NetworkTimeout { .. }
            | ApiError::RateLimitExceeded { .. } => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ApiError::http_error(503, "https://api.example.com/matches");
        assert_eq!(
            err.to_string(),
            "HTTP error 503 (URL: https://api.example.com/matches)"
        );

        let err = ApiError::daily_limit_exceeded("api-football");
        assert!(err.to_string().contains("api-football"));
        assert!(err.to_string().contains("tomorrow"));
    }

    #[test]
    fn test_quota_classification() {
        assert!(ApiError::rate_limit_exceeded("football-data.org").is_quota());
        assert!(ApiError::daily_limit_exceeded("api-football").is_quota());
        assert!(!ApiError::http_error(404, "u").is_quota());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::network_timeout("u").is_retryable());
        assert!(ApiError::http_error(502, "u").is_retryable());
        assert!(ApiError::rate_limit_exceeded("football-data.org").is_retryable());
        assert!(!ApiError::daily_limit_exceeded("api-football").is_retryable());
        assert!(!ApiError::http_error(404, "u").is_retryable());
        assert!(!ApiError::decoding_error("bad json", "u").is_retryable());
    }
}
