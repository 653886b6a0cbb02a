//! Interactive mode: one URL at a time until the user quits.

use anyhow::Result;
use imgfetch_core::transport::Transport;
use imgfetch_core::FetchSession;
use std::io::{BufRead, Write};

use crate::cli::input::{is_quit, is_yes, prompt};
use crate::cli::report::print_result;

/// Returns the number of images saved.
pub fn run_interactive<T, R, W>(session: &mut FetchSession<T>, input: &mut R, out: &mut W) -> Result<usize>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to imgfetch - interactive mode")?;
    writeln!(out, "Images are saved to {}\n", session.dest_dir().display())?;

    let mut saved = 0;
    loop {
        let Some(url) = prompt(input, out, "Please enter the image URL (or 'quit' to exit): ")? else {
            break;
        };
        let url = url.trim();
        if is_quit(url) {
            break;
        }
        if url.is_empty() {
            writeln!(out, "Please provide a valid URL")?;
            continue;
        }

        writeln!(out, "\nConnecting to: {url}")?;
        let result = session.fetch(url);
        print_result(out, &result)?;
        if result.is_ok() {
            saved += 1;
        }

        let again = prompt(input, out, "\nWould you like to fetch another image? (y/n): ")?;
        if !again.as_deref().is_some_and(is_yes) {
            break;
        }
    }

    writeln!(out, "\nThank you for using imgfetch!")?;
    tracing::info!(saved, "interactive session ended");
    Ok(saved)
}
