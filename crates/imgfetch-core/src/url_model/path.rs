//! Filename extraction from URL path.

use url::Url;

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Query and fragment are ignored. Returns `None` if the path is empty/root.
pub fn filename_from_url_path(url: &Url) -> Option<String> {
    let segment = url.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
