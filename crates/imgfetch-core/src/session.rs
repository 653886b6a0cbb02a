//! Per-run fetch state: destination directory, digests written so far, and
//! the transport used to reach the network.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::content::max_bytes_for;
use crate::error::FetchFailure;
use crate::storage;
use crate::transport::{CurlTransport, Transport, TransportOptions};

/// Identifying header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Ubuntu-Image-Fetcher/1.0 (Respectful Community Tool)";

/// Knobs the pipeline needs; resolved by the caller (see `config`).
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_size_mb: u64,
    /// Extension for synthesized names when the content type is unknown.
    pub default_extension: String,
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_size_mb: 50,
            default_extension: "jpg".to_string(),
            max_redirects: 10,
        }
    }
}

impl FetchOptions {
    pub fn max_bytes(&self) -> u64 {
        max_bytes_for(self.max_size_mb)
    }

    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            max_redirects: self.max_redirects,
            max_body_bytes: Some(self.max_bytes()),
        }
    }
}

/// A file written by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedImage {
    pub filename: String,
    pub path: PathBuf,
    pub bytes_written: u64,
    pub content_type: String,
    pub digest: String,
}

/// Outcome of one pipeline run.
pub type FetchResult = Result<SavedImage, FetchFailure>;

/// Session state shared by every fetch in one run.
///
/// `seen_hashes` only ever holds digests of files this session wrote; it is
/// never pruned and never persisted.
pub struct FetchSession<T = CurlTransport> {
    pub(crate) dest_dir: PathBuf,
    pub(crate) seen_hashes: HashSet<String>,
    pub(crate) transport: T,
    pub(crate) options: FetchOptions,
}

impl FetchSession<CurlTransport> {
    /// Session using libcurl for HTTP.
    pub fn new(dest_dir: impl Into<PathBuf>, options: FetchOptions) -> Self {
        let transport = CurlTransport::new(options.transport_options());
        Self::with_transport(dest_dir, options, transport)
    }
}

impl<T: Transport> FetchSession<T> {
    pub fn with_transport(dest_dir: impl Into<PathBuf>, options: FetchOptions, transport: T) -> Self {
        FetchSession {
            dest_dir: dest_dir.into(),
            seen_hashes: HashSet::new(),
            transport,
            options,
        }
    }

    /// Create the destination directory if needed. Idempotent.
    pub fn prepare_dir(&self) -> Result<()> {
        storage::prepare_dir(&self.dest_dir)?;
        tracing::debug!(dir = %self.dest_dir.display(), "destination directory ready");
        Ok(())
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Number of distinct images written this session.
    pub fn seen_count(&self) -> usize {
        self.seen_hashes.len()
    }

    pub fn has_seen(&self, digest: &str) -> bool {
        self.seen_hashes.contains(digest)
    }
}
