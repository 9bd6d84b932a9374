//! Error types for the DeepScout domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all DeepScout operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Language-model errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Web-search errors ---
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures from the language-model backend.
///
/// These are never recovered inside the research loop: a failed model call
/// aborts the run and surfaces to the caller.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Failures from the web-search backend.
///
/// Unlike [`ProviderError`], these are contained at the search step: the
/// loop logs the failure, treats the round as having zero new results, and
/// keeps going.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Search provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn search_error_displays_correctly() {
        let err = Error::Search(SearchError::AuthenticationFailed(
            "invalid Tavily key".into(),
        ));
        assert!(err.to_string().contains("Search error"));
        assert!(err.to_string().contains("invalid Tavily key"));
    }

    #[test]
    fn config_error_carries_message() {
        let err = Error::Config {
            message: "TAVILY_API_KEY is required".into(),
        };
        assert!(err.to_string().contains("TAVILY_API_KEY"));
    }
}
