//! The per-URL fetch pipeline.
//!
//! `check URL → GET → validate → dedup → name → resolve collision → write →
//! record digest`. Each step can end the run with a [`FetchFailure`]; there
//! are no retries and nothing is written unless every earlier step passed.

use tracing::{debug, info, warn};

use crate::content::{check_size, validate_content, ContentInfo};
use crate::digest::content_digest;
use crate::error::FetchFailure;
use crate::session::{FetchResult, FetchSession, SavedImage};
use crate::storage;
use crate::transport::{ResponseHead, Transport};
use crate::url_model::{check_url, derive_filename};

impl<T: Transport> FetchSession<T> {
    /// Fetch one URL and save it if it is a new, valid image.
    pub fn fetch(&mut self, raw_url: &str) -> FetchResult {
        let result = self.run_pipeline(raw_url);
        match &result {
            Ok(saved) => info!(
                url = raw_url,
                path = %saved.path.display(),
                bytes = saved.bytes_written,
                "image saved"
            ),
            Err(failure) => warn!(url = raw_url, kind = failure.kind(), "fetch failed: {}", failure),
        }
        result
    }

    fn run_pipeline(&mut self, raw_url: &str) -> FetchResult {
        let url = check_url(raw_url)?;
        debug!(url = %url, "URL passed safety check");

        let max_bytes = self.options.max_bytes();
        let mut content: Option<ContentInfo> = None;
        let mut inspect = |head: &ResponseHead| -> Result<(), FetchFailure> {
            debug!(status = head.status, content_type = ?head.content_type, "response head");
            if !head.is_success() {
                return Err(FetchFailure::HttpError {
                    status: head.status,
                });
            }
            let info = ContentInfo::from_head(head);
            validate_content(&info, max_bytes)?;
            content = Some(info);
            Ok(())
        };
        let body = self.transport.get(&url, &mut inspect)?;
        let content = content.ok_or_else(|| FetchFailure::TransportError {
            message: "response headers were never inspected".to_string(),
        })?;
        check_size(body.len() as u64, max_bytes)?;
        debug!(
            content_type = %content.content_type,
            declared_mb = ?content.declared_size_mb(),
            received = body.len(),
            "content validated"
        );

        let digest = content_digest(&body);
        debug!(digest = %digest, "content digest");
        if self.seen_hashes.contains(&digest) {
            return Err(FetchFailure::DuplicateContent { digest });
        }

        let candidate = derive_filename(
            &url,
            &content.content_type,
            content.content_disposition.as_deref(),
            &self.options.default_extension,
        );
        let path = storage::resolve_in_dir(&self.dest_dir, &candidate)
            .map_err(|e| FetchFailure::write_error(&e))?;
        if path.file_name().and_then(|n| n.to_str()) != Some(candidate.as_str()) {
            debug!(candidate = %candidate, resolved = %path.display(), "name taken; using suffix");
        }

        let bytes_written =
            storage::write_new_file(&path, &body).map_err(|e| FetchFailure::write_error(&e))?;
        self.seen_hashes.insert(digest.clone());

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(candidate);
        Ok(SavedImage {
            filename,
            path,
            bytes_written,
            content_type: content.content_type,
            digest,
        })
    }
}
