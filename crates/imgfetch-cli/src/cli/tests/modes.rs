//! Interactive and batch modes against a scripted transport.

use crate::cli::commands::{run_batch_cmd, run_interactive};
use imgfetch_core::transport::{HeadInspector, ResponseHead, Transport};
use imgfetch_core::{FetchFailure, FetchOptions, FetchSession};
use std::cell::Cell;
use std::io::Cursor;
use url::Url;

/// `/missing*` is a 404; anything else is a PNG whose body is the path.
#[derive(Default)]
struct Scripted {
    calls: Cell<usize>,
}

impl Transport for Scripted {
    fn get(&self, url: &Url, inspect: &mut HeadInspector<'_>) -> Result<Vec<u8>, FetchFailure> {
        self.calls.set(self.calls.get() + 1);
        let status = if url.path().starts_with("/missing") { 404 } else { 200 };
        inspect(&ResponseHead {
            status,
            content_type: Some("image/png".into()),
            content_length: None,
            content_disposition: None,
        })?;
        Ok(url.path().as_bytes().to_vec())
    }
}

fn session(dir: &tempfile::TempDir) -> FetchSession<Scripted> {
    let session = FetchSession::with_transport(dir.path(), FetchOptions::default(), Scripted::default());
    session.prepare_dir().unwrap();
    session
}

#[test]
fn interactive_fetches_until_declined() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut input = Cursor::new("https://example.com/cat.png\ny\nhttps://example.com/dog.png\nn\n");
    let mut out = Vec::new();

    let saved = run_interactive(&mut session, &mut input, &mut out).unwrap();

    assert_eq!(saved, 2);
    assert!(dir.path().join("cat.png").exists());
    assert!(dir.path().join("dog.png").exists());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("✓ Successfully fetched: cat.png"), "{text}");
}

#[test]
fn interactive_reprompts_on_empty_and_quits() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut input = Cursor::new("\n  \nquit\n");
    let mut out = Vec::new();

    let saved = run_interactive(&mut session, &mut input, &mut out).unwrap();

    assert_eq!(saved, 0);
    assert_eq!(session.transport().calls.get(), 0);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Please provide a valid URL").count(), 2);
}

#[test]
fn interactive_reports_invalid_url_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut input = Cursor::new("ftp://example.com/a.png\nn\n");
    let mut out = Vec::new();

    let saved = run_interactive(&mut session, &mut input, &mut out).unwrap();

    assert_eq!(saved, 0);
    assert_eq!(session.transport().calls.get(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("✗ Safety check failed"), "{text}");
}

#[test]
fn interactive_ends_on_eof() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut out = Vec::new();
    let saved = run_interactive(&mut session, &mut Cursor::new(""), &mut out).unwrap();
    assert_eq!(saved, 0);
}

#[test]
fn batch_from_stdin_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut input = Cursor::new(
        "https://example.com/a.png, https://example.com/missing.png\nhttps://example.com/a.png\n\n",
    );
    let mut out = Vec::new();

    let summary = run_batch_cmd(&mut session, vec![], false, &mut input, &mut out).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("--- Processing 3/3 ---"), "{text}");
    assert!(text.contains("Duplicate image detected"), "{text}");
    assert!(text.contains("Summary: 1/3 images successfully downloaded"), "{text}");
}

#[test]
fn batch_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let urls = vec!["https://example.com/a.png,https://example.com/missing".to_string()];
    let mut out = Vec::new();

    run_batch_cmd(&mut session, urls, true, &mut Cursor::new(""), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["succeeded"], 1);
    assert_eq!(value["outcomes"][0]["saved"]["filename"], "a.png");
    assert_eq!(value["outcomes"][1]["failure_kind"], "http_error");
}

#[test]
fn batch_without_urls_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let mut out = Vec::new();
    assert!(run_batch_cmd(&mut session, vec![], false, &mut Cursor::new("\n"), &mut out).is_err());
}

#[test]
fn batch_with_no_success_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session(&dir);
    let urls = vec!["https://example.com/missing".to_string()];
    let mut out = Vec::new();
    assert!(run_batch_cmd(&mut session, urls, false, &mut Cursor::new(""), &mut out).is_err());
}
