//! Content type to file extension mapping.

/// Media type without parameters, lower-cased (`"image/PNG; q=1"` → `"image/png"`).
pub fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Canonical extension (without dot) for a content type, if known.
///
/// Common image types use a fixed preferred spelling (`jpg`, not `jfif`);
/// anything else falls back to the first extension `mime_guess` knows.
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = mime_essence(content_type);
    let preferred = match essence.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
        "image/png" | "image/x-png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        "image/bmp" | "image/x-ms-bmp" => Some("bmp"),
        "image/tiff" => Some("tiff"),
        "image/x-icon" | "image/vnd.microsoft.icon" => Some("ico"),
        "image/avif" => Some("avif"),
        "image/heic" => Some("heic"),
        "image/heif" => Some("heif"),
        _ => None,
    };
    preferred.or_else(|| {
        mime_guess::get_mime_extensions_str(&essence).and_then(|exts| exts.first().copied())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_image_extensions() {
        assert_eq!(extension_for_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_content_type("image/png"), Some("png"));
        assert_eq!(extension_for_content_type("image/svg+xml"), Some("svg"));
        assert_eq!(extension_for_content_type("image/webp"), Some("webp"));
    }

    #[test]
    fn parameters_and_case_ignored() {
        assert_eq!(extension_for_content_type("Image/PNG; charset=binary"), Some("png"));
        assert_eq!(mime_essence(" image/GIF ;x=y"), "image/gif");
    }

    #[test]
    fn unknown_type() {
        assert_eq!(extension_for_content_type("image/x-made-up-format"), None);
        assert_eq!(extension_for_content_type(""), None);
    }
}
