//! Content validation: is the response an image, and is it small enough.

use crate::error::FetchFailure;
use crate::transport::ResponseHead;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What the response headers say about the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentInfo {
    /// Lower-cased `Content-Type`, empty when the header is missing.
    pub content_type: String,
    pub declared_size_bytes: Option<u64>,
    pub content_disposition: Option<String>,
}

impl ContentInfo {
    pub fn from_head(head: &ResponseHead) -> Self {
        ContentInfo {
            content_type: head
                .content_type
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            declared_size_bytes: head.content_length,
            content_disposition: head.content_disposition.clone(),
        }
    }

    pub fn declared_size_mb(&self) -> Option<f64> {
        self.declared_size_bytes.map(bytes_to_mb)
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Byte limit for a size cap given in MB.
pub fn max_bytes_for(max_size_mb: u64) -> u64 {
    max_size_mb.saturating_mul(1024 * 1024)
}

/// Rejects non-image content types and declared sizes above `max_bytes`.
pub fn validate_content(info: &ContentInfo, max_bytes: u64) -> Result<(), FetchFailure> {
    if !info.content_type.starts_with("image/") {
        return Err(FetchFailure::NotAnImage {
            declared_type: info.content_type.clone(),
        });
    }
    if let Some(declared) = info.declared_size_bytes {
        check_size(declared, max_bytes)?;
    }
    Ok(())
}

/// Rejects a (declared or actual) size above `max_bytes`.
pub fn check_size(bytes: u64, max_bytes: u64) -> Result<(), FetchFailure> {
    if bytes > max_bytes {
        return Err(FetchFailure::TooLarge {
            size_mb: bytes_to_mb(bytes),
        });
    }
    Ok(())
}
