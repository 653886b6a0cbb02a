//! Batch mode: fetch a list of URLs and print a summary.

use anyhow::{bail, Result};
use imgfetch_core::transport::Transport;
use imgfetch_core::{run_batch, BatchEvent, BatchSummary, FetchSession};
use std::io::{self, BufRead, Write};

use crate::cli::input::{parse_url_line, read_url_list};
use crate::cli::report::{print_result, print_summary};

/// URLs come from `urls`, or from `input` when that is empty. Fails when no
/// URL was given or none was saved.
pub fn run_batch_cmd<T, R, W>(
    session: &mut FetchSession<T>,
    urls: Vec<String>,
    json: bool,
    input: &mut R,
    out: &mut W,
) -> Result<BatchSummary>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let urls = if urls.is_empty() {
        if !json {
            writeln!(out, "Enter URLs separated by commas or one per line")?;
            writeln!(out, "End with an empty line when done:")?;
            out.flush()?;
        }
        read_url_list(input)?
    } else {
        urls.iter().flat_map(|u| parse_url_line(u)).collect()
    };
    if urls.is_empty() {
        bail!("no URLs provided");
    }

    let summary = fetch_all(session, &urls, json, out)?;
    if !summary.any_succeeded() {
        bail!("none of the {} URL(s) could be downloaded", summary.total);
    }
    Ok(summary)
}

/// Run the batch driver, printing progress (or JSON) to `out`.
pub(crate) fn fetch_all<T, W>(
    session: &mut FetchSession<T>,
    urls: &[String],
    json: bool,
    out: &mut W,
) -> Result<BatchSummary>
where
    T: Transport,
    W: Write,
{
    let mut write_err = None;
    if !json {
        writeln!(out, "\nProcessing {} URL(s)...", urls.len())?;
    }

    let summary = run_batch(session, urls, |event| {
        if json || write_err.is_some() {
            return;
        }
        if let Err(e) = print_event(out, &event) {
            write_err = Some(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        print_summary(out, &summary)?;
    }
    Ok(summary)
}

fn print_event<W: Write>(out: &mut W, event: &BatchEvent<'_>) -> io::Result<()> {
    match event {
        BatchEvent::Started { index, total, url } => {
            writeln!(out, "\n--- Processing {index}/{total} ---")?;
            writeln!(out, "Connecting to: {url}")
        }
        BatchEvent::Finished { result, .. } => print_result(out, result),
    }
}
