//! Failure reasons for a single fetch attempt.
//!
//! Every step of the pipeline reports through this one closed enum so callers
//! can match exhaustively; nothing escapes the pipeline as a panic or an
//! `anyhow` error.

use thiserror::Error;

/// Why a URL was not saved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    /// Malformed URL, unsupported scheme, or missing host.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// The request did not complete within the configured timeout.
    #[error("connection timed out")]
    Timeout,

    /// DNS resolution or TCP/TLS connect failed, or the peer dropped the connection.
    #[error("connection error: {message}")]
    ConnectionError { message: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    HttpError { status: u32 },

    /// Any other transport-level failure.
    #[error("transport error: {message}")]
    TransportError { message: String },

    /// The response content type does not start with `image/`.
    #[error("content is not an image (type: {declared_type})")]
    NotAnImage { declared_type: String },

    /// Declared or actual body size exceeds the configured limit.
    #[error("file too large: {size_mb:.1}MB")]
    TooLarge { size_mb: f64 },

    /// Identical bytes were already saved earlier in this session.
    #[error("duplicate image (digest {digest})")]
    DuplicateContent { digest: String },

    /// Local filesystem failure while persisting the file.
    #[error("file save error: {message}")]
    WriteError { message: String },
}

impl FetchFailure {
    /// Short stable label, used in structured logs and JSON summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::InvalidUrl { .. } => "invalid_url",
            FetchFailure::Timeout => "timeout",
            FetchFailure::ConnectionError { .. } => "connection_error",
            FetchFailure::HttpError { .. } => "http_error",
            FetchFailure::TransportError { .. } => "transport_error",
            FetchFailure::NotAnImage { .. } => "not_an_image",
            FetchFailure::TooLarge { .. } => "too_large",
            FetchFailure::DuplicateContent { .. } => "duplicate_content",
            FetchFailure::WriteError { .. } => "write_error",
        }
    }

    pub(crate) fn invalid_url(reason: impl Into<String>) -> Self {
        FetchFailure::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub(crate) fn write_error(e: &std::io::Error) -> Self {
        FetchFailure::WriteError {
            message: e.to_string(),
        }
    }
}
