//! Error types for brandkit
//!
//! The pipeline exposes exactly two failure kinds to callers: invalid input
//! (the URL never made it past syntactic validation) and a single wrapped
//! category for everything that can go wrong afterwards. Fetch-stage errors
//! keep internal granularity via [`FetchError`] but collapse at the pipeline
//! boundary.

use thiserror::Error;

/// The public error type for branding extraction
#[derive(Error, Debug)]
pub enum Error {
    /// The input string is not a usable http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Anything that failed after validation: transport, timeout, bad
    /// status, oversized body
    #[error("Failed to extract branding: {0}")]
    ExtractionFailed(String),
}

/// Fetch-stage errors, collapsed into [`Error::ExtractionFailed`] before
/// they reach a caller
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// Response body exceeded the size cap
    #[error("response body exceeded {0} bytes")]
    BodyTooLarge(usize),
}

/// Result type alias for brandkit operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an arbitrary cause into the uniform extraction-failure category
    pub fn wrap<E: std::fmt::Display>(cause: E) -> Self {
        Error::ExtractionFailed(cause.to_string())
    }
}
