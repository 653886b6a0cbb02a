//! CLI tests: argument parsing, input handling, and the modes driven
//! through a scripted transport.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod modes;
