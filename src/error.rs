//! Crate-level error types.
//!
//! [`CoinboardError`] unifies every error source (configuration, HTTP,
//! JSON, terminal I/O) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoinboardError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum CoinboardError {
    /// An environment variable held a missing or invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The market data API answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// A fetch failed with a plain human-readable message.
    #[error("{0}")]
    Fetch(String),
}
