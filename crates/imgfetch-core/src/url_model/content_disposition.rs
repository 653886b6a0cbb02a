//! `Content-Disposition` filename extraction.

/// Extracts the suggested filename from a raw `Content-Disposition` value.
///
/// Handles quoted (`filename="a b.png"`), token (`filename=a.png`) and
/// RFC 5987 (`filename*=UTF-8''a%20b.png`) forms; `filename*` wins when both
/// are present.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let mut plain: Option<String> = None;

    for param in header_value.split(';') {
        let Some((name, value)) = param.trim().split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();

        if name.eq_ignore_ascii_case("filename*") {
            let encoded = value
                .get(..7)
                .filter(|p| p.eq_ignore_ascii_case("utf-8''"))
                .map(|_| &value[7..]);
            if let Some(decoded) = encoded.map(percent_decode).filter(|s| !s.is_empty()) {
                return Some(decoded);
            }
        } else if name.eq_ignore_ascii_case("filename") {
            let unquoted = match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
                Some(inner) => unescape_quoted(inner),
                None => value.to_string(),
            };
            if !unquoted.is_empty() {
                plain = Some(unquoted);
            }
        }
    }

    plain
}

fn unescape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('\\', Some(&next)) if next == '"' || next == '\\' => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(h << 4 | l);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quoted() {
        let r = parse_content_disposition_filename("inline; filename=\"sunset.jpg\"");
        assert_eq!(r.as_deref(), Some("sunset.jpg"));
    }

    #[test]
    fn parse_token() {
        let r = parse_content_disposition_filename("attachment; filename=sunset.jpg");
        assert_eq!(r.as_deref(), Some("sunset.jpg"));
    }

    #[test]
    fn parse_escaped_quote() {
        let r = parse_content_disposition_filename(r#"inline; filename="a\"b.png""#);
        assert_eq!(r.as_deref(), Some("a\"b.png"));
    }

    #[test]
    fn filename_star_takes_precedence() {
        let r = parse_content_disposition_filename(
            "attachment; filename=\"fallback.png\"; filename*=UTF-8''caf%C3%A9.png",
        );
        assert_eq!(r.as_deref(), Some("café.png"));
    }

    #[test]
    fn trailing_percent_is_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%2"), "a%2");
    }

    #[test]
    fn no_filename_param() {
        assert_eq!(parse_content_disposition_filename("inline"), None);
    }
}
