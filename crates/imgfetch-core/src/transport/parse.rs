//! Parse raw HTTP response header lines into a ResponseHead.

use super::ResponseHead;

/// Parses the header lines of one response (status line included).
///
/// Unknown headers are ignored; an unparseable status line yields status 0,
/// which callers replace with the code curl reports.
pub(crate) fn parse_header_lines(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head.status = line
                .split_whitespace()
                .nth(1)
                .and_then(|code| code.parse().ok())
                .unwrap_or(0);
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-type") {
            head.content_type = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("content-length") {
            head.content_length = value.parse::<u64>().ok();
        } else if name.eq_ignore_ascii_case("content-disposition") {
            head.content_disposition = Some(value.to_string());
        }
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn status_type_and_length() {
        let head = parse_header_lines(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
            "Content-Length: 12345",
        ]));
        assert_eq!(head.status, 200);
        assert_eq!(head.content_type.as_deref(), Some("image/png"));
        assert_eq!(head.content_length, Some(12345));
        assert!(head.content_disposition.is_none());
    }

    #[test]
    fn http2_status_line_and_case_insensitive_names() {
        let head = parse_header_lines(&lines(&["HTTP/2 404", "content-type: text/html; charset=utf-8"]));
        assert_eq!(head.status, 404);
        assert_eq!(head.content_type.as_deref(), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn bad_length_is_ignored() {
        let head = parse_header_lines(&lines(&["HTTP/1.1 200 OK", "Content-Length: lots"]));
        assert_eq!(head.content_length, None);
    }

    #[test]
    fn content_disposition() {
        let head = parse_header_lines(&lines(&[
            "Content-Disposition: inline; filename=\"cat.png\"",
        ]));
        assert_eq!(head.status, 0);
        assert!(head
            .content_disposition
            .as_deref()
            .unwrap()
            .contains("cat.png"));
    }
}
