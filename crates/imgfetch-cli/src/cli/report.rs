//! Human-readable output for fetch results.

use imgfetch_core::{BatchSummary, FetchFailure, FetchResult};
use std::io::{self, Write};

pub fn print_result<W: Write>(out: &mut W, result: &FetchResult) -> io::Result<()> {
    match result {
        Ok(saved) => {
            writeln!(out, "  content type: {}", saved.content_type)?;
            writeln!(
                out,
                "  size: {:.2}MB",
                imgfetch_core::content::bytes_to_mb(saved.bytes_written)
            )?;
            writeln!(out, "✓ Successfully fetched: {}", saved.filename)?;
            writeln!(out, "✓ Image saved to: {}", saved.path.display())
        }
        Err(failure) => writeln!(out, "✗ {}", describe(failure)),
    }
}

/// One-line explanation with a hint where the failure has an obvious cause.
pub fn describe(failure: &FetchFailure) -> String {
    match failure {
        FetchFailure::InvalidUrl { reason } => format!("Safety check failed: {reason}"),
        FetchFailure::Timeout => "Connection timeout - the server was too slow to respond".into(),
        FetchFailure::ConnectionError { message } => {
            format!("Connection error - unable to reach the server ({message})")
        }
        FetchFailure::HttpError { status } => {
            format!("HTTP error: {status} - resource not accessible")
        }
        FetchFailure::NotAnImage { .. } | FetchFailure::TooLarge { .. } => {
            format!("Content validation failed: {failure}")
        }
        FetchFailure::DuplicateContent { .. } => {
            "Duplicate image detected - skipping download".into()
        }
        FetchFailure::TransportError { .. } | FetchFailure::WriteError { .. } => {
            failure.to_string()
        }
    }
}

pub fn print_summary<W: Write>(out: &mut W, summary: &BatchSummary) -> io::Result<()> {
    writeln!(
        out,
        "\nSummary: {}/{} images successfully downloaded",
        summary.succeeded, summary.total
    )
}
