//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way an upstream call can fail. Nothing in
//! this crate recovers from these errors; callers surface them as-is.

use thiserror::Error;

/// Errors that can occur while talking to an upstream data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a response (DNS, connect, TLS, read errors).
    ///
    /// The URL is stripped from the wrapped error because it carries the API key.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The underlying HTTP client gave up waiting for the provider.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// Status line and body excerpt from the provider
        message: String,
    },

    /// The provider answered, but the body is not the JSON shape we expected.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the body
        provider: String,
        /// Decoder error message
        message: String,
    },
}

impl MarketDataError {
    /// Classify a reqwest transport error, dropping the request URL.
    pub(crate) fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err.without_url())
        }
    }
}
