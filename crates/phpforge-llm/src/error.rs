//! Provider error types for phpforge-llm.
//!
//! Adapters use [`ProviderError`] internally for transport and parse
//! failures and turn those into fallback projects before returning. Only the
//! registry-level variants ([`ProviderError::Unavailable`] and
//! [`ProviderError::NotConfigured`]) ever reach callers of
//! [`ProviderRegistry::generate_code`](crate::registry::ProviderRegistry::generate_code).

use thiserror::Error;

/// Errors that can occur when talking to a hosted LLM provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The HTTP request failed or returned a non-success status.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The provider rejected the credential (HTTP 401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The configured model does not exist on the provider (HTTP 404).
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The provider has no credential (e.g. missing API key).
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// No adapter is registered under the requested id.
    #[error("provider not available: {0}")]
    Unavailable(String),

    /// The provider answered, but not with a usable project.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request exceeded its deadline.
    #[error("timeout after {0}s")]
    Timeout(u64),

    /// An HTTP-level error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
