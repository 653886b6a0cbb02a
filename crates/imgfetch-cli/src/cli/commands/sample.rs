//! `imgfetch sample` – fetch a few well-known test images.

use anyhow::{bail, Result};
use imgfetch_core::transport::Transport;
use imgfetch_core::FetchSession;
use std::io::Write;

use super::batch::fetch_all;

pub const SAMPLE_URLS: [&str; 3] = [
    "https://httpbin.org/image/jpeg",
    "https://httpbin.org/image/png",
    "https://httpbin.org/image/webp",
];

pub fn run_sample<T: Transport, W: Write>(session: &mut FetchSession<T>, out: &mut W) -> Result<()> {
    writeln!(out, "Testing with {} sample URLs...", SAMPLE_URLS.len())?;
    let urls: Vec<String> = SAMPLE_URLS.iter().map(|s| s.to_string()).collect();
    let summary = fetch_all(session, &urls, false, out)?;
    if !summary.any_succeeded() {
        bail!("no sample image could be downloaded");
    }
    writeln!(
        out,
        "Test completed: {}/{} successful downloads",
        summary.succeeded, summary.total
    )?;
    Ok(())
}
