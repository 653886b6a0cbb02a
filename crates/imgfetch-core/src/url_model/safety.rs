//! URL safety check run before any network traffic.

use url::Url;

use crate::error::FetchFailure;

/// Parses `raw` and accepts it only for `http`/`https` with a non-empty host.
pub fn check_url(raw: &str) -> Result<Url, FetchFailure> {
    let raw = raw.trim();
    let url = Url::parse(raw)
        .map_err(|e| FetchFailure::invalid_url(format!("URL validation error: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchFailure::invalid_url(format!(
            "only HTTP/HTTPS URLs are supported (got {})",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchFailure::invalid_url("missing host"));
    }
    Ok(url)
}
