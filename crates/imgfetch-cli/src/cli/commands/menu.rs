//! Menu shown when no subcommand is given.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::input::prompt;
use crate::cli::CliCommand;

/// Ask for a mode. Returns the chosen command and whether debug mode was
/// picked. Anything unrecognized falls back to interactive.
pub fn choose_from_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(CliCommand, bool)> {
    writeln!(out, "imgfetch")?;
    writeln!(out, "Choose your approach:")?;
    writeln!(out, "1. Interactive mode (single URLs)")?;
    writeln!(out, "2. Batch mode (multiple URLs)")?;
    writeln!(out, "3. Debug mode (with detailed logging)")?;
    let mut choice = prompt(input, out, "Enter your choice (1, 2, or 3): ")?.unwrap_or_default();

    let debug = choice.trim() == "3";
    if debug {
        writeln!(out, "\nDebug mode enabled - detailed logging active")?;
        writeln!(out, "1. Interactive mode (single URLs)")?;
        writeln!(out, "2. Batch mode (multiple URLs)")?;
        choice = prompt(input, out, "Enter your choice (1 or 2): ")?.unwrap_or_default();
    }

    let command = match choice.trim() {
        "2" => CliCommand::Batch {
            urls: Vec::new(),
            json: false,
        },
        _ => CliCommand::Interactive,
    };
    Ok((command, debug))
}
