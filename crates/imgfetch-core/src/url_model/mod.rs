//! URL modeling and filename derivation.
//!
//! Checks that a URL is safe to fetch and derives a local filename from the
//! URL path, the `Content-Disposition` header, or the content type.

mod content_disposition;
mod extension;
mod path;
mod safety;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use extension::{extension_for_content_type, mime_essence};
pub use path::filename_from_url_path;
pub use safety::check_url;
pub use sanitize::sanitize_filename;

use std::path::Path;
use url::Url;

use crate::digest::url_disambiguator;

/// Prefix for names synthesized when neither URL nor headers carry one.
const SYNTHESIZED_PREFIX: &str = "image_";

/// Derives the filename to save a fetched image under.
///
/// In order of preference:
/// 1. the last URL path segment, if it has an extension after sanitizing;
/// 2. the `Content-Disposition` filename, under the same condition;
/// 3. `image_<n>.<ext>`, with `<n>` derived from the URL and `<ext>` from
///    the content type (or `default_extension` when the type is unknown).
///
/// # Examples
///
/// - `https://example.com/photos/cat.png` → `"cat.png"`
/// - `https://example.com/render?id=7` with `image/webp` → `"image_<n>.webp"`
pub fn derive_filename(
    url: &Url,
    content_type: &str,
    content_disposition: Option<&str>,
    default_extension: &str,
) -> String {
    let from_url = filename_from_url_path(url).map(|s| sanitize_filename(&s));
    if let Some(name) = from_url.filter(|n| has_extension(n)) {
        return name;
    }

    let from_header = content_disposition
        .and_then(parse_content_disposition_filename)
        .map(|s| sanitize_filename(&s));
    if let Some(name) = from_header.filter(|n| has_extension(n)) {
        return name;
    }

    synthesize_filename(url, content_type, default_extension)
}

fn synthesize_filename(url: &Url, content_type: &str, default_extension: &str) -> String {
    let ext = extension_for_content_type(content_type)
        .unwrap_or_else(|| default_extension.trim_start_matches('.'));
    let n = url_disambiguator(url.as_str(), 10_000);
    sanitize_filename(&format!("{SYNTHESIZED_PREFIX}{n}.{ext}"))
}

fn has_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}
